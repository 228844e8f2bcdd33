//! Result shapes returned by the generation operations.
//!
//! Every field is required: `serde` rejects a payload with a missing or
//! mistyped field, which the client reports as a malformed response.
//! Unknown extra fields are ignored.

use serde::{Deserialize, Serialize};

use crate::llm_client::{Schema, StructuredOutput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysisResult {
    pub key_points: Vec<String>,
    pub daily_tasks: Vec<String>,
    pub tools: Vec<String>,
    pub daily_routine: Vec<String>,
    pub motivation: Vec<String>,
    pub interview_points: Vec<String>,
}

impl StructuredOutput for JobAnalysisResult {
    fn schema() -> Schema {
        Schema::object(vec![
            ("keyPoints", Schema::string_list()),
            ("dailyTasks", Schema::string_list()),
            ("tools", Schema::string_list()),
            ("dailyRoutine", Schema::string_list()),
            ("motivation", Schema::string_list()),
            ("interviewPoints", Schema::string_list()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAnalysisResult {
    /// Meant to be 0–100 but passed through exactly as the model returned it.
    pub score: i64,
    pub summary: String,
    pub keyword_match: KeywordMatch,
    pub recommendations: Vec<String>,
}

impl CvAnalysisResult {
    /// Score bounded to 0..=100, for display.
    pub fn clamped_score(&self) -> u8 {
        self.score.clamp(0, 100) as u8
    }
}

impl StructuredOutput for CvAnalysisResult {
    fn schema() -> Schema {
        Schema::object(vec![
            (
                "score",
                Schema::integer().described("A compatibility score between 0 and 100."),
            ),
            (
                "summary",
                Schema::string()
                    .described("A brief summary of the CV's strengths and weaknesses for this job."),
            ),
            (
                "keywordMatch",
                Schema::object(vec![
                    ("present", Schema::string_list()),
                    ("missing", Schema::string_list()),
                ]),
            ),
            (
                "recommendations",
                Schema::string_list().described("Actionable recommendations to improve the CV."),
            ),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterResult {
    pub letter: String,
}

impl StructuredOutput for CoverLetterResult {
    fn schema() -> Schema {
        Schema::object(vec![(
            "letter",
            Schema::string().described("The full, well-formatted cover letter text."),
        )])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPrepResult {
    pub questions: Vec<InterviewQuestion>,
}

impl StructuredOutput for InterviewPrepResult {
    fn schema() -> Schema {
        Schema::object(vec![(
            "questions",
            Schema::array_of(Schema::object(vec![
                ("question", Schema::string()),
                (
                    "answer",
                    Schema::string().described("A well-crafted example answer."),
                ),
            ])),
        )])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewFeedbackResult {
    pub feedback: String,
}

impl StructuredOutput for InterviewFeedbackResult {
    fn schema() -> Schema {
        Schema::object(vec![(
            "feedback",
            Schema::string().described("Constructive feedback on the user's answer."),
        )])
    }
}

/// Facts about the candidate used to personalise a cover letter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInfo {
    pub full_name: String,
    pub experience: String,
    pub objective: String,
    #[serde(default)]
    pub strengths: Option<String>,
}
