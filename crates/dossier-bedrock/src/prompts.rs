//! Instruction text for the two operations.
//!
//! The persona, citation guidance, formatting rules, and the worked example
//! are configuration content carried verbatim; the builders only
//! interpolate the classified document types, the person information, and
//! the raw context. Nothing here drops a detected type or a chunk.

use dossier_core::models::metadata::MetadataRecord;

use crate::context;

/// Persona shared by profile generation and question answering.
pub const SYSTEM_PROMPT: &str = "\
You are a world-class expert in psychology, psychological assessment, and mental health. \
You specialize in synthesizing diverse data sources—such as psychological assessments, \
medical history, therapy notes, and diagnostic evaluations—into insightful, psychologically \
sophisticated profiles. Your goal is to produce actionable insights, grounded in evidence, \
that support treatment planning and patient care. Always cite the data source behind your \
claims and remain both rigorous and humanistic in tone.";

const PROFILE_SOURCE_GUIDANCE: &str = "\
EXTREMELY IMPORTANT GUIDANCE ON SOURCES:\n\
1. When citing sources, DO NOT refer to them by their file type (e.g., 'PDF', 'DOCX'). Instead, identify them by their content type:\n\
   - Refer to personality assessments as 'Hogan Assessment' or similar specific assessment name\n\
   - Refer to 360-degree feedback as '360° Feedback'\n\
   - Refer to resumes as 'CV/Resume'\n\
   - Refer to intercultural assessments as 'IDI Assessment'\n\
   - For other documents, identify them by their purpose (e.g., 'Performance Review', 'Interview Notes')\n\n\
2. For each major claim or insight in your analysis, include a brief in-text citation showing the source, like this: '... demonstrates strong analytical abilities (Hogan Assessment).' or '... has experience managing global teams (CV/Resume).'\n\n\
Use all and only the documents and data provided by the user. \
You must only reference the document types listed above. Do not invent or assume the existence of other data sources. \
If a type of data (e.g., 'Coaching Notes') is not present in the provided documents, do not reference it.\n\n\
For each section of your analysis, make a good faith effort to use and reference insights from all of the provided documents. \n\n";

const PROFILE_FORMATTING_RULES: &str = "\
IMPORTANT FORMATTING INSTRUCTIONS:\n\
- For 'Key Strengths', 'Potential Challenges', 'Treatment Considerations', and 'Risk Factors' sections, ALWAYS format the content as a numbered list (1., 2., 3., etc.)\n\
- Insert a blank line between each numbered item (double line break)\n\
- Each point should be focused on a single strength, challenge, or consideration\n\
- Limit each enumerated list to a maximum of 5 items\n\
- For 'Profile Summary' and 'Psychological Style' sections, use paragraph format\n\
- Each significant claim should include a parenthetical reference to the source (e.g., 'exhibits anxious tendencies (Psychological Assessment)')\n\
- Do not use markdown formatting or special characters that might interfere with JSON\n\n";

const PROFILE_SECTION_LIST: &str = "\
Sections:\n\
1. Profile Summary\n\
2. Key Strengths\n\
3. Potential Challenges\n\
4. Psychological Style\n\
5. Treatment Considerations\n\
6. Risk Factors\n\n";

const PROFILE_EXAMPLE_OUTPUT: &str = r#"[
  {"section": "Profile Summary", "content": "The patient exhibits signs of moderate anxiety with comorbid depressive features (Psychological Assessment) and has shown partial response to previous cognitive-behavioral interventions (Treatment History)...", "sources": "Psychological Assessment, Treatment History"},
  {"section": "Key Strengths", "content": "1. Strong introspective abilities and psychological mindedness (Psychological Assessment)\n\n2. Consistent engagement in therapeutic process (Treatment Notes)\n\n3. Supportive family environment (Clinical Interview)", "sources": "Psychological Assessment, Treatment Notes, Clinical Interview"},
  {"section": "Potential Challenges", "content": "1. Tendency toward rumination and catastrophic thinking (Psychological Assessment)\n\n2. Difficulty with emotional regulation during acute stress (Treatment Notes)\n\n3. Inconsistent application of coping strategies (Psychological Assessment)", "sources": "Psychological Assessment, Treatment Notes"},
  {"section": "Psychological Style", "content": "The patient demonstrates an anxious-avoidant attachment style (Psychological Assessment) with a tendency to withdraw during interpersonal conflicts (Clinical Interview)...", "sources": "Psychological Assessment, Clinical Interview"},
  {"section": "Treatment Considerations", "content": "1. Structured cognitive-behavioral approaches with emphasis on thought records (Psychological Assessment)\n\n2. Gradual exposure to anxiety-provoking situations (Treatment History)\n\n3. Mindfulness training to reduce rumination (Clinical Interview)", "sources": "Psychological Assessment, Treatment History, Clinical Interview"},
  {"section": "Risk Factors", "content": "1. History of passive suicidal ideation during major depressive episodes (Treatment History)\n\n2. Social isolation during periods of heightened anxiety (Psychological Assessment)\n\n3. Tendency to discontinue medication without consultation (Treatment Notes)", "sources": "Treatment History, Psychological Assessment, Treatment Notes"}
]"#;

const PROFILE_CLOSING: &str = "\
Return only the JSON array, with no extra commentary or explanation.\n\
Remember to format 'Key Strengths', 'Potential Challenges', 'Treatment Considerations', and 'Risk Factors' as numbered lists with proper line breaks between items.";

/// Assemble the profile-generation instruction.
pub fn build_profile_prompt(
    detected: &[String],
    records: &[MetadataRecord],
    chunks: &[String],
) -> String {
    let doc_type_list = context::document_type_lines(&context::unique_file_types(records));
    let detected_line = context::detected_types_line(detected);
    let person_info = context::person_info_block(records);
    let context_text = context::join_context(chunks);

    format!(
        "You have been provided with the following types of documents for your analysis:\n\
         {doc_type_list}\n\n\
         Based on content analysis, these appear to include: {detected_line}\n\n\
         {PROFILE_SOURCE_GUIDANCE}\
         Based on the following psychology documents, generate a comprehensive psychology profile:\n\n\
         Person Information:\n{person_info}\n\n\
         {PROFILE_FORMATTING_RULES}\
         {PROFILE_SECTION_LIST}\
         Example output:\n\
         {PROFILE_EXAMPLE_OUTPUT}\n\n\
         {context_text}\n\n\
         {PROFILE_CLOSING}"
    )
}

fn answer_citation_guidance(detected_line: &str) -> String {
    format!(
        "\nEXTREMELY IMPORTANT GUIDANCE ON SOURCES AND CITATIONS:\n\n\
         1. When citing sources, DO NOT refer to them by their file type (e.g., 'PDF', 'DOCX'). Instead, identify them by their content type:\n\
         \x20  - Refer to psychological assessments as 'Psychological Assessment' \n\
         \x20  - Refer to therapy documentation as 'Treatment Notes'\n\
         \x20  - Refer to medical information as 'Medical History'\n\
         \x20  - Refer to personality measures as 'Personality Assessment'\n\
         \x20  - For other documents, identify them by their purpose (e.g., 'Clinical Interview', 'Standardized Tests')\n\n\
         2. For EVERY significant claim or insight in your analysis, include a brief in-text citation showing the source, like this: \n\
         \x20  '... exhibits anxiety symptoms (Psychological Assessment).' or '... has responded well to CBT techniques (Treatment Notes).'\n\n\
         3. Do not make claims that cannot be directly supported by the provided documents. If you're unsure about a claim, clearly indicate this.\n\n\
         4. At the end of your response, include a \"References\" section that lists all the source documents you cited.\n\n\
         5. Every paragraph should include at least one specific citation to a source document.\n\n\
         6. DO NOT HALLUCINATE OR INVENT SOURCES. Only use the document types that have been detected in the uploaded materials:\n\
         \x20  {detected_line}\n"
    )
}

/// Assemble the question-answering instruction.
pub fn build_answer_prompt(detected: &[String], chunks: &[String], question: &str) -> String {
    let detected_line = context::detected_types_line(detected);
    let guidance = answer_citation_guidance(&detected_line);
    let context_text = context::join_context(chunks);

    format!(
        "Based on the following patient documents, answer this special question from the mental health practitioner:\n\n\
         {guidance}\n\n\
         {context_text}\n\n\
         Question: {question}\n\n\
         Please provide a detailed, evidence-based answer, providing specific in-text citations for each claim (e.g., \"exhibits anxiety symptoms (Psychological Assessment)\").\n\n\
         End your response with a \"References\" section that lists all the documents you cited.\n\n\
         Remember: Only make claims that are directly supported by the documents. Include parenthetical citations for each major claim."
    )
}
