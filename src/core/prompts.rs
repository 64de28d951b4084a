use crate::domain::model::{Prospect, Service, UserProfile};

pub const SEARCH_SYSTEM_INSTRUCTION: &str = "You are a B2B prospect search API. Your only \
function is to return data as JSON. Never include explanatory text, greetings or anything \
else outside the requested JSON.";

pub const EMAIL_SYSTEM_INSTRUCTION: &str = "You are an email drafting API. Your only \
function is to return a JSON object with the keys 'subject' and 'body'. Never write \
anything outside the JSON object.";

/// Builds the search prompt for one (service, sector, location) query.
///
/// The requested schema matches the camelCase wire names of
/// [`Prospect`](crate::domain::model::Prospect); the validator enforces the
/// same rules the prompt states.
pub fn search_prompt(service: &Service, sector: &str, location: &str) -> String {
    format!(
        r#"Search for up to 10 potential clients in the '{sector}' sector in '{location}' that need the service: '{name}'.

STRICT RULES:
1. MANDATORY FILTERING: Return ONLY prospects with a 'hireProbability' above 80.
2. COMPLETE DATA: For each company find all of the following. Every field is REQUIRED.
   - A relevant contact (manager, director) with their name, title and email.
   - The company's phone number.
   - The full address of the main office.
   - An average rating and review count where available; omit the 'rating' field otherwise.
3. CONTACT DISCOVERY: Search multiple sources, not just one directory. The goal is the person most likely to hire the service. IMPORTANT: ignore and discard any email address that starts with 'info'.
4. ORDER: Sort the final result from highest to lowest 'hireProbability'.
5. OUTPUT FORMAT: Your answer MUST be EXCLUSIVELY a valid JSON array. Do not add introductory text, explanations or code-fence markers. The answer must start with '[' and end with ']'.

The structure of each JSON object must be:
{{
  "id": "string (a unique UUID v4 for each prospect)",
  "companyName": "string",
  "webUrl": "string",
  "contact": {{ "name": "string", "title": "string", "email": "string", "phone": "string" }},
  "location": "string (city/country, e.g. '{location}')",
  "sector": "string (e.g. '{sector}')",
  "fullAddress": "string",
  "needsAnalysis": "string (a brief analysis of why they need the service)",
  "hireProbability": "number (between 81 and 100)",
  "rating": {{ "score": "number", "reviews": "number" }}
}}
"#,
        sector = sector,
        location = location,
        name = service.name,
    )
}

/// Builds the drafting prompt for one outreach email. The signature uses the
/// service web page when one is configured, falling back to the profile
/// page.
pub fn email_prompt(prospect: &Prospect, service: &Service, profile: &UserProfile) -> String {
    let signature_url = service.web_url.as_deref().unwrap_or(&profile.web_url);

    format!(
        r#"Your task is to draft a highly personalised B2B outreach email.

**STEP 1: RESEARCH**
Review the company '{company}' (website: {web}). Look for goals, challenges or current projects. Your aim is a concrete hook or need beyond the prior analysis.

**STEP 2: DRAFT THE EMAIL**

**Recipient:**
- Company: {company}
- Contact: {contact_name} ({contact_title})
- Prior needs analysis: {needs}

**Sender (my profile):**
- Name: {sender_name}
- Email: {sender_email}
- Web: {signature_url}
- My service: {service_name}
- Service description: {service_description}

**STRICT RULES FOR THE EMAIL:**
1. **Subject:** short, intriguing and personalised, referencing your research.
2. **Body:**
   - Greeting: "Dear {contact_name}:".
   - Introduction (paragraph 1): open with something specific you found. Show you did your homework.
   - Connection and solution (paragraph 2): link your finding to a likely need and present '{service_name}' as the direct solution to THAT problem. Be concrete.
   - Call to action (paragraph 3): clear and low-commitment, e.g. a short 15-minute call next week.
   - Sign-off: end with "Best regards," followed by this signature, each element on its own line:
     {sender_name}
     {sender_email}
     {signature_url}

**MANDATORY OUTPUT FORMAT:**
Your answer MUST be EXCLUSIVELY a valid JSON object. Do not include text, explanations or formatting markers. The answer must start with '{{' and end with '}}'.

The JSON structure must be:
{{
  "subject": "string",
  "body": "string"
}}
"#,
        company = prospect.company_name,
        web = prospect.web_url,
        contact_name = prospect.contact.name,
        contact_title = prospect.contact.title,
        needs = prospect.needs_analysis,
        sender_name = profile.name,
        sender_email = profile.email,
        signature_url = signature_url,
        service_name = service.name,
        service_description = service.description,
    )
}
