// Prompt templates for the generation operations.
// Placeholders are filled with `llm_client::prompts::fill_template`; user text is embedded verbatim.

/// Replace: {language}, {job_description}, {json_only}
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze this job description. Extract the key \
information: the key points of the role, the daily tasks, the tools and technologies used, \
a typical daily routine, what makes the role motivating, and the points worth raising in an \
interview. Respond in {language}.

Job Description:
---
{job_description}
---

{json_only}";

/// Replace: {language}, {job_description}, {cv_text}, {json_only}
pub const CV_ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze the CV against the Job Description. \
Provide a compatibility score between 0 and 100, a summary, keyword matches (keywords from the \
job description present in and missing from the CV), and actionable recommendations. \
Respond in {language}.

Job Description:
---
{job_description}
---

CV:
---
{cv_text}
---

{json_only}";

/// Replace: {language}, {tone}, {job_description}, {cv_text}, {full_name},
///          {experience}, {objective}, {strengths}, {json_only}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "Generate a cover letter in {language}.
Tone: {tone}.
Job Description: {job_description}
CV: {cv_text}
Candidate Info:
- Name: {full_name}
- Experience: {experience}
- Objective: {objective}
- Strengths: {strengths}
The letter should be professional, tailored, and compelling.

{json_only}";

/// Shown for `{strengths}` when the candidate gave none.
pub const STRENGTHS_NOT_PROVIDED: &str = "Not provided";

/// Replace: {language}, {cv_context}, {job_description}, {json_only}
pub const INTERVIEW_PREP_PROMPT_TEMPLATE: &str = "Based on this job description, generate 5-7 \
common interview questions and provide excellent example answers. Tailor them to the role. \
Respond in {language}.{cv_context}

Job Description:
---
{job_description}
---

{json_only}";

/// Replace: {cv_text}. Inserted as `{cv_context}` only when a CV was supplied.
pub const INTERVIEW_PREP_CV_CONTEXT_TEMPLATE: &str = "

Here is the candidate's CV for context:
---
{cv_text}
---";

/// Replace: {language}, {question}, {user_answer}, {json_only}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = "Provide constructive feedback on the user's answer \
to the interview question. Be encouraging but helpful. Respond in {language}.

Question: \"{question}\"

User's Answer: \"{user_answer}\"

{json_only}";
