//! Snapshot persistence and concurrency behavior across process-style
//! open/close cycles.

use std::sync::Arc;
use std::thread;

use medscan_casebank::{CaseBank, TextEmbedder};
use medscan_core::{CaseMetadata, CaseRetrieval, RecordType};
use pretty_assertions::assert_eq;

fn prescription(patient: &str, symptoms: &str, diagnosis: &str) -> CaseMetadata {
    CaseMetadata {
        patient_id: Some(patient.to_string()),
        symptoms: Some(symptoms.to_string()),
        diagnosis: Some(diagnosis.to_string()),
        medicines: vec!["Amoxicillin".to_string()],
        doctor_name: Some("Dr. Rao".to_string()),
        date: Some("2026-08-25T10:00:00Z".to_string()),
        record_type: Some(RecordType::Prescription),
        precautions: vec!["Take after food".to_string()],
    }
}

#[test]
fn snapshot_round_trips_through_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.json");

    {
        let bank = CaseBank::open(&path).unwrap();
        bank.add_text(
            "high fever with productive cough",
            prescription("P-001", "high fever with productive cough", "pneumonia"),
        )
        .unwrap();
        bank.add_text(
            "itchy rash on forearm",
            prescription("P-002", "itchy rash on forearm", "contact dermatitis"),
        )
        .unwrap();
    }

    let reopened = CaseBank::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);

    let hits = reopened
        .find_similar("high fever with productive cough", 5)
        .unwrap();
    assert_eq!(hits[0].metadata.patient_id.as_deref(), Some("P-001"));
    assert_eq!(hits[0].metadata.diagnosis.as_deref(), Some("pneumonia"));
    assert_eq!(
        hits[0].metadata.record_type,
        Some(RecordType::Prescription)
    );
    assert!((hits[0].similarity - 1.0).abs() < 1e-5);
}

#[test]
fn missing_snapshot_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let bank = CaseBank::open(dir.path().join("nonexistent.json")).unwrap();
    assert!(bank.is_empty());
}

#[test]
fn concurrent_adds_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.json");
    let bank = Arc::new(CaseBank::open(&path).unwrap());

    let mut handles = Vec::new();
    for t in 0..4 {
        let bank = Arc::clone(&bank);
        handles.push(thread::spawn(move || {
            for i in 0..8 {
                let text = format!("symptom set {t}-{i}");
                let meta = CaseMetadata {
                    patient_id: Some(format!("P-{t}-{i}")),
                    symptoms: Some(text.clone()),
                    ..CaseMetadata::default()
                };
                bank.add(TextEmbedder::shared().embed(&text), meta).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(bank.len(), 32);
    let reopened = CaseBank::open(&path).unwrap();
    assert_eq!(reopened.len(), 32);
}
