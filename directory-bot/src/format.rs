//! Response formatter: pure functions from [`Outcome`] to reply text.
//!
//! Only display fields are rendered. Absent address/phone/email lines are left out.

use directory_core::DirectoryError;
use storage::{BusinessListing, DirectoryStats, NewBusiness};

use crate::outcome::Outcome;
use crate::registration::{RegistrationStep, ValidationError};
use crate::search::SearchOutcome;

const GENERIC_FAILURE: &str =
    "Sorry, something went wrong on our side. Please try again in a moment or send 'help' for assistance.";

#[derive(Debug, Clone)]
pub struct ResponseFormatter {
    max_results: usize,
    support_email: String,
}

impl ResponseFormatter {
    pub fn new(max_results: usize, support_email: impl Into<String>) -> Self {
        Self {
            max_results,
            support_email: support_email.into(),
        }
    }

    pub fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Welcome => welcome(),
            Outcome::Help | Outcome::Fallback => help(),
            Outcome::Contact => self.contact(),
            Outcome::NothingToCancel => {
                "There is no registration in progress to cancel.\n\nSend 'register' to add your business or 'help' for other options.".to_string()
            }
            Outcome::RegistrationStarted => format!(
                "📝 Business Registration\n\nLet's add your business to our directory!\n\n{}\n\n💡 Type 'cancel' anytime to stop registration.",
                prompt(RegistrationStep::Name)
            ),
            Outcome::Prompt(step) => prompt(*step),
            Outcome::StepAccepted {
                completed,
                accepted,
                next,
            } => format!("{}\n\n{}", accepted_line(*completed, accepted), prompt(*next)),
            Outcome::Invalid { step, error } => invalid(*step, error),
            Outcome::Cancelled => {
                "❌ Registration cancelled. Send 'register' to start again or 'help' for other options.".to_string()
            }
            Outcome::Registered { id, business } => registered(*id, business),
            Outcome::RegistrationFailed => {
                "❌ Sorry, we couldn't save your business just now. Your answers are kept: please send your keywords again to retry, or 'cancel' to stop.".to_string()
            }
            Outcome::Search { query, outcome } => self.search(query, outcome),
            Outcome::Near { location, outcome } => self.near(location, outcome),
            Outcome::Stats(stats) => stats_text(stats),
        }
    }

    /// Single generic message for store failures; no internal detail leaks to the user.
    pub fn render_error(&self, _error: &DirectoryError) -> String {
        GENERIC_FAILURE.to_string()
    }

    fn contact(&self) -> String {
        format!(
            "📞 Need Help?\n\nFor support or questions:\n• Email: {}\n• Reply 'help' for commands",
            self.support_email
        )
    }

    /// Numbered entries, at most `max_results`.
    pub fn listings(&self, listings: &[BusinessListing]) -> String {
        listings
            .iter()
            .take(self.max_results)
            .enumerate()
            .map(|(i, listing)| listing_entry(i + 1, listing))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn search(&self, query: &str, outcome: &SearchOutcome) -> String {
        match outcome {
            SearchOutcome::Found(listings) => format!(
                "🔍 Found {} business(es) for '{}':\n\n{}\n\n💡 Can't find what you're looking for?\n• Try different keywords\n• Send 'register' to add your business",
                listings.len().min(self.max_results),
                query,
                self.listings(listings)
            ),
            SearchOutcome::NoResults => format!(
                "❌ No businesses found for '{}'.\n\n💡 Try these keywords:\n• restaurant, pizza, food\n• hotel, accommodation\n• pharmacy, medicine\n• repair, service\n\n🏢 Own a business?\nSend 'register' to add it FREE!",
                query
            ),
        }
    }

    fn near(&self, location: &str, outcome: &SearchOutcome) -> String {
        match outcome {
            SearchOutcome::Found(listings) => format!(
                "📍 Found {} business(es) near '{}':\n\n{}\n\n💡 Try searching by business type too!",
                listings.len().min(self.max_results),
                location,
                self.listings(listings)
            ),
            SearchOutcome::NoResults => format!(
                "📍 No businesses found near '{}'.\n\n💡 Try searching by:\n• Business type: restaurant, hotel, pharmacy\n• Different location: downtown, airport, mall\n• Send 'register' to add your business",
                location
            ),
        }
    }
}

fn welcome() -> String {
    "👋 Welcome to Business Directory!\n\n🔍 Search: Send keywords like 'pizza', 'hotel'\n📝 Register: Send 'register' to add your business\n❓ Help: Send 'help' for more options".to_string()
}

fn help() -> String {
    [
        "🏢 Business Directory Bot",
        "",
        "🔍 SEARCH FOR BUSINESSES:",
        "Send keywords like:",
        "• restaurant, pizza, food",
        "• hotel, accommodation",
        "• pharmacy, medicine",
        "",
        "📍 SEARCH BY LOCATION:",
        "• 'near downtown' - businesses whose address mentions downtown",
        "",
        "📝 REGISTER YOUR BUSINESS:",
        "• Send 'register' to add your business",
        "• It's FREE and takes 2 minutes!",
        "",
        "❓ OTHER COMMANDS:",
        "• 'help' - Show this menu",
        "• 'contact' - Get support",
        "• 'stats' - Directory statistics",
        "• 'cancel' - Stop a registration in progress",
    ]
    .join("\n")
}

fn step_header(step: RegistrationStep) -> String {
    format!("Step {} of {}:", step.number(), RegistrationStep::COUNT)
}

fn prompt(step: RegistrationStep) -> String {
    let body = match step {
        RegistrationStep::Name => "What's your business name?\n\nExample: \"Mario's Pizza Restaurant\"",
        RegistrationStep::Address => {
            "What's your business address?\n\nExample: \"123 Main Street, Downtown, City\""
        }
        RegistrationStep::Phone => {
            "What's your business phone number?\n\nExample: \"+1234567890\" or \"0712345678\""
        }
        RegistrationStep::Email => {
            "What's your business email?\n\nExample: \"info@mybusiness.com\"\n\n💡 Send 'skip' if you don't have a business email."
        }
        RegistrationStep::Keywords => {
            "What keywords describe your business?\n\nSeparate with commas. Example: \"pizza, restaurant, italian, delivery\""
        }
    };
    format!("{} {}", step_header(step), body)
}

fn accepted_line(step: RegistrationStep, accepted: &str) -> String {
    match step {
        RegistrationStep::Name => format!("✅ Business name: {}", accepted),
        RegistrationStep::Email if accepted.is_empty() => "✅ Email skipped.".to_string(),
        other => format!("✅ {} saved!", capitalize(other.field())),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn invalid(step: RegistrationStep, error: &ValidationError) -> String {
    format!("⚠️ Invalid {}: {}.\n\n{}", step.field(), error, prompt(step))
}

fn listing_entry(number: usize, listing: &BusinessListing) -> String {
    let mut lines = vec![format!("{}. {}", number, listing.name)];
    if let Some(address) = &listing.address {
        lines.push(format!("📍 {}", address));
    }
    if let Some(phone) = &listing.phone {
        lines.push(format!("📞 {}", phone));
    }
    if let Some(email) = &listing.email {
        lines.push(format!("📧 {}", email));
    }
    lines.join("\n")
}

fn registered(id: i64, business: &NewBusiness) -> String {
    let mut lines = vec![
        "🎉 Registration Complete!".to_string(),
        String::new(),
        "Your business has been added to our directory:".to_string(),
        String::new(),
        format!("🏢 {}", business.name),
    ];
    if let Some(address) = &business.address {
        lines.push(format!("📍 {}", address));
    }
    if let Some(phone) = &business.phone {
        lines.push(format!("📞 {}", phone));
    }
    if let Some(email) = &business.email {
        lines.push(format!("📧 {}", email));
    }
    lines.push(format!("🏷️ Keywords: {}", business.keywords.join(", ")));
    lines.push(String::new());
    lines.push("✅ Customers can now find your business by searching for any of your keywords!".to_string());
    if let Some(first) = business.keywords.first() {
        lines.push(format!("💡 Tell them to search: {}", first));
    }
    lines.push(String::new());
    lines.push(format!("Business ID: #{}", id));
    lines.join("\n")
}

fn stats_text(stats: &DirectoryStats) -> String {
    let mut text = format!("📊 Directory Statistics\n\n🏢 Total Businesses: {}\n", stats.total_active);
    if !stats.recent.is_empty() {
        text.push_str("\n🆕 Recently Added:\n");
        for business in &stats.recent {
            text.push_str(&format!(
                "• {} ({})\n",
                business.name,
                business.registered_at.format("%b %d")
            ));
        }
    }
    if !stats.popular_keywords.is_empty() {
        text.push_str("\n🔥 Popular Categories:\n");
        for keyword in &stats.popular_keywords {
            text.push_str(&format!("• {} ({})\n", keyword.keyword, keyword.count));
        }
    }
    text.push_str("\n💡 Send 'register' to add your business FREE!");
    text
}
