//! Prompt templates sent to the model.
//!
//! All templates are plain strings; the document text is interpolated
//! verbatim, never escaped or truncated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persona and grounding rules for document chat.
pub const SYSTEM_INSTRUCTION: &str = r#"You are Saathi.ai, an expert Supreme Court legal assistant specializing in Indian law.

CRITICAL INSTRUCTIONS:
1. You must answer questions based STRICTLY on the provided 'DOCUMENT CONTEXT' below.
2. If the answer is not clearly stated or cannot be inferred from the document context, explicitly state: "I could not find this information in the provided document."
3. Use proper Indian legal terminology (e.g., "Hon'ble Court", "learned counsel", "petitioner", "respondent", "writ petition", "special leave petition", etc.)
4. Format your answers using Markdown for better readability:
   - Use **bold** for important terms and case names
   - Use bullet points for listing arguments or points
   - Use headers (##) for organizing longer responses
   - Quote relevant portions of the document when applicable
5. Be precise, professional, and concise in your responses.
6. When citing from the document, use quotation marks and reference the relevant section.
7. If asked about legal precedents or citations mentioned in the document, provide them accurately.

Remember: You are a legal research assistant, not providing legal advice. Always base your responses on the document provided."#;

pub const TRANSCRIPTION_PROMPT: &str = r#"Please transcribe this audio recording accurately.

Instructions:
- Transcribe all spoken content word-for-word
- Include speaker labels if multiple speakers are detected (Speaker 1, Speaker 2, etc.)
- Preserve any pauses or significant non-verbal sounds in [brackets]
- Format the transcription in clear paragraphs
- If the audio contains legal or technical terminology, transcribe it precisely
- If any part is unclear or inaudible, indicate with [inaudible]

Provide only the transcription without any additional commentary."#;

pub const OCR_PROMPT: &str = r#"Extract all legible text from the attached scanned document or image.

Instructions:
- Preserve the original reading order, headings and paragraph breaks
- Reproduce names, dates, case numbers and citations exactly as written
- Keep tables as plain rows of text, one row per line
- If a word or passage cannot be read, write [illegible] in its place
- Do not summarise, translate or correct the text

Provide only the extracted text without any additional commentary."#;

/// Wraps the user's question with the document context for one chat turn.
pub fn contextual_prompt(doc_text: &str, question: &str) -> String {
    format!(
        "\n=== DOCUMENT CONTEXT ===\n{doc_text}\n=== END OF DOCUMENT CONTEXT ===\n\n\
         Based on the above document context, please answer the following question:\n\n\
         {question}\n"
    )
}

/// The canned summaries offered next to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    Short,
    Detailed,
    Chronology,
    KeyPoints,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 4] = [
        SummaryKind::Short,
        SummaryKind::Detailed,
        SummaryKind::Chronology,
        SummaryKind::KeyPoints,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKind::Short => "short",
            SummaryKind::Detailed => "detailed",
            SummaryKind::Chronology => "chronology",
            SummaryKind::KeyPoints => "key_points",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "short" => Ok(SummaryKind::Short),
            "detailed" => Ok(SummaryKind::Detailed),
            "chronology" => Ok(SummaryKind::Chronology),
            "key_points" | "keypoints" => Ok(SummaryKind::KeyPoints),
            _ => Err(format!("Unsupported summary type: {}", s)),
        }
    }
}

pub fn summary_prompt(kind: SummaryKind, text: &str) -> String {
    match kind {
        SummaryKind::Short => format!(
            r#"
You are a junior advocate assisting a senior counsel in the Supreme Court of India.

Read the following case document and produce a STRICT 5-line summary covering:
1. Parties
2. Nature of dispute
3. Core legal issue
4. Current procedural stage
5. Relief sought

Rules:
- Use neutral legal language
- Do NOT invent facts
- If something is unclear, state "Not specified"

Document:
{text}
"#
        ),
        SummaryKind::Detailed => format!(
            r#"
You are preparing a case brief for a senior advocate.

From the document below, extract and present the following headings:

1. Parties
2. Factual Background
3. Procedural History
4. Legal Issues
5. Arguments Raised
6. Reliefs Sought

Rules:
- Use clear headings
- Stick strictly to the document
- No assumptions
- No case law unless mentioned

Document:
{text}
"#
        ),
        SummaryKind::Chronology => format!(
            r#"
Extract ALL dates and related events from the document below.

Instructions:
- Present events in chronological order
- Use bullet points
- If date is approximate or inferred, clearly mark it

Document:
{text}
"#
        ),
        SummaryKind::KeyPoints => format!(
            r#"
You are briefing a senior advocate who has five minutes before the hearing.

List the key points of the document below.

Instructions:
- Use a numbered list, most important point first
- One sentence per point, tied to what the document actually says
- Include any directions, deadlines or undertakings recorded in the document
- No assumptions and no outside case law

Document:
{text}
"#
        ),
    }
}
