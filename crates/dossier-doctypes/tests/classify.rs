use dossier_core::models::generation::GenerationKind;
use dossier_core::models::metadata::MetadataRecord;
use dossier_doctypes::classify::{build_file_label_map, detect_content_types, label_for_file};

fn chunks(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn hogan_detected_regardless_of_case() {
    let docs = chunks(&["HOGAN leadership report for the candidate."]);
    let detected = detect_content_types(&docs, GenerationKind::Profile);
    assert!(detected.contains(&"Hogan Assessment".to_string()));
}

#[test]
fn no_recognized_terms_yields_empty_detection() {
    let docs = chunks(&["The weather was pleasant and the meeting ran long."]);
    assert!(detect_content_types(&docs, GenerationKind::Profile).is_empty());
    assert!(detect_content_types(&docs, GenerationKind::Answer).is_empty());
}

#[test]
fn empty_chunk_list_yields_empty_detection() {
    assert!(detect_content_types(&[], GenerationKind::Profile).is_empty());
}

#[test]
fn labels_come_back_in_table_order() {
    let docs = chunks(&["The 360-degree feedback praised her resume and Hogan scores."]);
    let detected = detect_content_types(&docs, GenerationKind::Profile);
    assert_eq!(
        detected,
        vec![
            "Hogan Assessment".to_string(),
            "360° Feedback".to_string(),
            "CV/Resume".to_string(),
        ]
    );
}

#[test]
fn term_spanning_two_chunks_matches_across_the_join() {
    let docs = chunks(&["Motives Values", "Preferences breakdown attached."]);
    let detected = detect_content_types(&docs, GenerationKind::Profile);
    assert!(detected.contains(&"Hogan Assessment".to_string()));
}

#[test]
fn modes_use_their_own_vocabulary() {
    let docs = chunks(&["Hogan HPI profile attached."]);

    let profile = detect_content_types(&docs, GenerationKind::Profile);
    assert_eq!(profile, vec!["Hogan Assessment".to_string()]);

    let clinical = detect_content_types(&docs, GenerationKind::Answer);
    assert_eq!(clinical, vec!["Personality Assessment".to_string()]);
}

#[test]
fn clinical_terms_detected_in_answer_mode() {
    let docs = chunks(&[
        "Diagnosis per DSM criteria; progress notes attached.",
        "Current medication list and vitals from the physical exam.",
    ]);
    let detected = detect_content_types(&docs, GenerationKind::Answer);
    assert_eq!(
        detected,
        vec![
            "Psychological Assessment".to_string(),
            "Treatment Notes".to_string(),
            "Medical History".to_string(),
        ]
    );
}

#[test]
fn filename_rules_apply_in_priority_order() {
    assert_eq!(label_for_file("hogan_360_cv.pdf", "pdf"), "Hogan Assessment");
    assert_eq!(label_for_file("360_cv_idi.pdf", "pdf"), "360° Feedback");
    assert_eq!(label_for_file("my_resume_idi.docx", "docx"), "CV/Resume");
    assert_eq!(label_for_file("idi_scores.pdf", "pdf"), "IDI Assessment");
    assert_eq!(label_for_file("tmpAB12.pdf", "pdf"), "PDF Document");
}

#[test]
fn accented_resume_filename_matches() {
    assert_eq!(label_for_file("mon_résumé.pdf", "pdf"), "CV/Resume");
}

#[test]
fn uppercase_filename_still_matches_keyword_rules() {
    assert_eq!(label_for_file("HOGAN_REPORT.PDF", "pdf"), "Hogan Assessment");
}

#[test]
fn generic_fallback_uses_uppercased_file_type() {
    assert_eq!(label_for_file("attachment_one.bin", "docx"), "DOCX Document");
}

#[test]
fn records_missing_either_reserved_key_are_skipped() {
    let records = vec![
        MetadataRecord::new().with("file_name", "notes.pdf"),
        MetadataRecord::new().with("file_type", "pdf"),
        MetadataRecord::new()
            .with("file_name", "hogan_report.pdf")
            .with("file_type", "pdf"),
    ];

    let map = build_file_label_map(&records);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("hogan_report.pdf"), Some("Hogan Assessment"));
    assert_eq!(map.get("notes.pdf"), None);
}

#[test]
fn map_preserves_insertion_order() {
    let records = vec![
        MetadataRecord::new()
            .with("file_name", "tmpZZ99.pdf")
            .with("file_type", "pdf"),
        MetadataRecord::new()
            .with("file_name", "feedback_360.docx")
            .with("file_type", "docx"),
    ];

    let map = build_file_label_map(&records);
    let entries: Vec<_> = map.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("tmpZZ99.pdf", "PDF Document"),
            ("feedback_360.docx", "360° Feedback"),
        ]
    );
}

#[test]
fn reinserted_file_name_takes_the_new_label() {
    let records = vec![
        MetadataRecord::new()
            .with("file_name", "report.pdf")
            .with("file_type", "pdf"),
        MetadataRecord::new()
            .with("file_name", "report.pdf")
            .with("file_type", "docx"),
    ];

    let map = build_file_label_map(&records);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("report.pdf"), Some("DOCX Document"));
}

#[test]
fn resume_and_hogan_chunks_classify_end_to_end() {
    let docs = chunks(&[
        "... resume showing 10 years experience ...",
        "... Hogan Personality Inventory results show high ambition ...",
    ]);
    let records = vec![
        MetadataRecord::new()
            .with("file_name", "tmpAB12.pdf")
            .with("file_type", "pdf"),
        MetadataRecord::new()
            .with("file_name", "hogan_report.pdf")
            .with("file_type", "pdf"),
    ];

    let detected = detect_content_types(&docs, GenerationKind::Profile);
    assert!(detected.contains(&"Hogan Assessment".to_string()));
    assert!(detected.contains(&"CV/Resume".to_string()));

    let map = build_file_label_map(&records);
    assert_eq!(map.get("tmpAB12.pdf"), Some("PDF Document"));
    assert_eq!(map.get("hogan_report.pdf"), Some("Hogan Assessment"));
}
