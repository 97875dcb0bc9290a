// Prompt templates for resume analysis and ad hoc questions.
// Placeholders are substituted by `analysis::builder`; nothing else lives here.

/// Professional summary. Replace: {resume_text}
pub const ABOUT_TEMPLATE: &str = "\
Provide a concise professional summary of this resume in 5-7 bullet points:
• Current role and experience level
• Key technical skills
• Education background
• Notable achievements (max 2)
• Overall profile strength

Keep it brief and professional.

Resume: {resume_text}";

/// Skill improvement suggestions. Replace: {resume_text}, {job_context}
pub const IMPROVE_TEMPLATE: &str = "\
Based on this resume, suggest 5-6 specific skill improvements:
• Technical skills to learn (2-3 specific ones)
• Certifications to pursue (1-2 relevant ones)
• Soft skills to develop (1-2 key areas)
• Industry trends to follow

Be specific and actionable. Focus on current market demands.

Resume: {resume_text}
{job_context}";

/// Optional line appended to the improve prompt. Replace: {job_description}
pub const IMPROVE_JOB_CONTEXT: &str = "Job Context: {job_description}";

/// Missing keyword diff. Replace: {resume_text}, {job_description}
pub const KEYWORDS_TEMPLATE: &str = "\
Compare this resume with the job description and identify:
• Missing technical keywords (5-6 specific terms)
• Missing soft skills keywords (2-3 terms)
• Industry buzzwords to add (3-4 terms)
• Action verbs to use (3-4 suggestions)

Be specific and list only the most important missing keywords.

Resume: {resume_text}
Job Description: {job_description}";

/// Strict-format match score. Replace: {resume_text}, {job_description}
pub const PERCENTAGE_TEMPLATE: &str = "\
Analyze match percentage between resume and job description. Provide ONLY this format:

MATCH SCORE: X%

BREAKDOWN:
• Skills Match: X% – Brief explanation in one line
• Experience Match: X% – Brief explanation in one line
• Education Match: X% – Brief explanation in one line

Keep each explanation to maximum 10-12 words. Do not add any other sections.

Resume: {resume_text}
Job Description: {job_description}";

/// Free-form question about the resume. Replace: {query}, {resume_text}
pub const CUSTOM_QUERY_TEMPLATE: &str = "\
Based on this resume, answer the following question concisely and helpfully:

Question: {query}

Resume: {resume_text}

Provide a focused, practical response in 3-5 sentences.";
