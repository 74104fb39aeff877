//! Deterministic keyword fallback
//!
//! When every provider attempt has failed (or none is configured), the
//! orchestrator synthesizes a canned guidance response by matching a fixed
//! ordered rule list against the lowercased prompt. First match wins, so a
//! given prompt always yields the same text.

use once_cell::sync::Lazy;

use crate::core::types::GenerationResult;

/// Confidence attached to every fallback result
pub const FALLBACK_CONFIDENCE: f32 = 0.6;

/// One keyword-containment rule
struct FallbackRule {
    keywords: &'static [&'static str],
    response: &'static str,
}

const CAREER_GUIDANCE: &str = "Choosing a career direction works best when you start from what \
you already enjoy and are good at. Make a short list of your strongest skills and the subjects \
or activities you lose track of time in, then look for roles that sit at their intersection. \
Talk to people already working in those roles, try small projects or internships to test the \
fit, and revisit the list every few months - career paths are rarely straight lines, and each \
experience sharpens the picture of where you want to go next.";

const COLLEGE_GUIDANCE: &str = "When evaluating colleges and universities, look past rankings \
and focus on fit: the strength of the specific program you want, teaching quality, placement \
and internship support, campus culture, and total cost including scholarships. Shortlist six \
to eight institutions across ambitious, realistic, and safe options, check their admission \
requirements and deadlines early, and where possible speak with current students or alumni of \
the program - they will tell you more about day-to-day reality than any brochure.";

const SKILL_GUIDANCE: &str = "The most reliable way to learn a new skill is to pair structured \
material with immediate practice. Pick one well-reviewed course or book rather than hoarding \
resources, set aside regular focused sessions, and build something real with each new concept \
while it is fresh. Share your work early for feedback, keep a simple log of what you have \
covered, and favor consistency over intensity - thirty minutes daily beats a five-hour binge \
once a week.";

const PLANNING_GUIDANCE: &str = "A useful plan starts from the end goal and works backwards. \
Define where you want to be in one to two years, break that into quarterly milestones, and \
then into small weekly actions you can actually schedule. Keep the first steps concrete - a \
course to finish, a project to ship, a person to contact - and review progress monthly, \
adjusting the plan rather than abandoning it when life interferes. A roadmap is a living \
document, not a contract.";

const GENERIC_GUIDANCE: &str = "Here is a general approach that works for most guidance \
questions: clarify what you actually want to achieve, gather information from people who have \
already done it, pick the smallest next step you can take this week, and take it. Progress \
comes from repeating that loop - clarify, learn, act - far more than from finding a perfect \
answer up front. If you can make your question more specific, the guidance can be too.";

/// Ordered rule table; evaluated top to bottom, first match wins
static RULES: Lazy<Vec<FallbackRule>> = Lazy::new(|| {
    vec![
        FallbackRule {
            keywords: &["career", "job"],
            response: CAREER_GUIDANCE,
        },
        FallbackRule {
            keywords: &["college", "university"],
            response: COLLEGE_GUIDANCE,
        },
        FallbackRule {
            keywords: &["skill", "learn"],
            response: SKILL_GUIDANCE,
        },
        FallbackRule {
            keywords: &["roadmap", "plan"],
            response: PLANNING_GUIDANCE,
        },
    ]
});

/// Select the canned guidance text for a prompt
pub fn select_response(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| prompt.contains(k)))
        .map(|rule| rule.response)
        .unwrap_or(GENERIC_GUIDANCE)
}

/// Build the full fallback result for a prompt
pub fn synthesize(prompt: &str) -> GenerationResult {
    GenerationResult::fallback(select_response(prompt), FALLBACK_CONFIDENCE)
}
