//! Seeded synthesis of demo sales leads.
//!
//! Output is a pure function of `(industry, city, count)`: the generator is
//! seeded from the key and owned by the call, so concurrent callers never
//! share random state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::models::score_color;

pub const DEFAULT_LEAD_COUNT: usize = 8;

const SOCIAL_LEVELS: [SocialPresence; 3] = [
    SocialPresence::Low,
    SocialPresence::Medium,
    SocialPresence::High,
];
const CALL_SLOTS: [&str; 3] = ["tomorrow 10:00", "tomorrow 15:00", "the day after tomorrow 11:30"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPresence {
    Low,
    Medium,
    High,
}

impl SocialPresence {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPresence::Low => "low",
            SocialPresence::Medium => "medium",
            SocialPresence::High => "high",
        }
    }

    fn bonus(&self) -> f64 {
        match self {
            SocialPresence::Low => 0.0,
            SocialPresence::Medium => 5.0,
            SocialPresence::High => 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub domain: String,
    pub score: u32,
    pub score_color: &'static str,
    pub reasons: Vec<String>,
    pub email: String,
}

/// Raw draws behind one lead.
#[derive(Debug, Clone, Copy)]
struct LeadTraits {
    web_age_years: u32,
    reviews: u32,
    social: SocialPresence,
    speed_index: u32,
}

impl LeadTraits {
    fn draw(rng: &mut StdRng) -> Self {
        Self {
            web_age_years: rng.gen_range(1..=12),
            reviews: rng.gen_range(0..=250),
            social: *SOCIAL_LEVELS.choose(rng).unwrap_or(&SocialPresence::Low),
            speed_index: rng.gen_range(40..=100),
        }
    }

    fn score(&self) -> u32 {
        let base = 40.0
            + f64::from(self.web_age_years * 3).min(20.0)
            + (f64::from(self.reviews) / 5.0).min(20.0)
            + self.social.bonus()
            + f64::from(self.speed_index - 40) / 6.0;
        base.clamp(10.0, 100.0) as u32
    }

    fn reasons(&self) -> Vec<String> {
        vec![
            format!("Domain active for ~{} years", self.web_age_years),
            format!("{} reviews found", self.reviews),
            format!("Social presence: {}", self.social.as_str()),
            format!("Performance index: {}/100", self.speed_index),
        ]
    }
}

/// Generate `count` leads, best score first. Ties keep generation order.
pub fn generate_leads(industry: &str, city: &str, count: usize) -> Vec<LeadRecord> {
    let mut rng = StdRng::seed_from_u64(seed_for(industry, city));
    let industry_title = title_case(industry);
    let city_title = title_case(city);
    let industry_slug = slug(industry);
    let city_slug = slug(city);

    let mut leads: Vec<LeadRecord> = (1..=count)
        .map(|n| {
            let name = format!("{} {} #{}", industry_title, city_title, n);
            let domain = format!("www.{}{}-{}.de", industry_slug, n, city_slug);
            let traits = LeadTraits::draw(&mut rng);
            let slot = CALL_SLOTS.choose(&mut rng).copied().unwrap_or(CALL_SLOTS[0]);
            let score = traits.score();

            LeadRecord {
                email: outreach_email(&name, city, slot),
                name,
                domain,
                score,
                score_color: score_color(score),
                reasons: traits.reasons(),
            }
        })
        .collect();

    leads.sort_by(|a, b| b.score.cmp(&a.score));
    log::debug!("Generated {} leads for {}/{}", leads.len(), industry, city);
    leads
}

fn seed_for(industry: &str, city: &str) -> u64 {
    let digest = Sha256::digest(format!("{}-{}", industry, city).as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn slug(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| *c != ' ').collect()
}

fn outreach_email(name: &str, city: &str, slot: &str) -> String {
    let greeting = name.split_whitespace().next().unwrap_or(name);
    format!(
        "Subject: A quick win for {name}

Hi {greeting},

I took a short look at your online presence and see 2-3 quick improvements
that could measurably bring you more enquiries from {city} (without more ad spend).
I can walk you through them in 10-15 minutes, no strings attached.

If it fits, I'll build you a small automation workflow as a free trial.
How does {slot} sound?

Best regards
William
"
    )
}
