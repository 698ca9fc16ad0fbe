// Chat assistant prompt templates.
// All prompts for the chat module are defined here.

use crate::profile::models::Profile;

/// Persona and behaviour rules. Replace `{name}` and `{key_facts}` before sending.
pub const ASSISTANT_PREAMBLE_TEMPLATE: &str = "\
You are an AI assistant representing {name}'s professional profile. \
You help recruiters, hiring managers, and anyone interested learn about {name}'s background, \
skills, experience, and qualifications.

Your role is to:
1. Answer questions about {name}'s work experience, skills, and qualifications
2. Highlight relevant experience when asked about specific technologies or domains
3. Be helpful, professional, and accurate
4. If you don't know something specific about {name}, say so honestly
5. Direct people to {name}'s LinkedIn, GitHub, or portfolio for more details when appropriate

Key facts to remember:
{key_facts}

Be conversational but professional. If asked about something outside {name}'s professional \
profile, politely redirect to professional topics.";

/// Separates the preamble from the context document in the system directive.
pub const CONTEXT_DIVIDER: &str = "\n\n---\n\n";

pub fn assistant_preamble(profile: &Profile) -> String {
    let key_facts = if profile.key_facts.is_empty() {
        format!(
            "- {} is a {} based in {}",
            profile.name, profile.title, profile.location.primary
        )
    } else {
        profile
            .key_facts
            .iter()
            .map(|fact| format!("- {fact}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    ASSISTANT_PREAMBLE_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{key_facts}", &key_facts)
}

/// Full system directive: preamble, divider, then the profile context document.
pub fn system_directive(profile: &Profile, context: &str) -> String {
    format!(
        "{}{CONTEXT_DIVIDER}Here is {}'s complete professional profile for reference:\n\n{context}",
        assistant_preamble(profile),
        profile.name
    )
}
