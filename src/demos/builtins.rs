//! Built-in demo scenarios.
//!
//! Five misinformation samples covering the common shapes (health myth,
//! chain forward, political rumor, lottery scam, pseudo-science) and one
//! credible control.

use super::types::DemoScenario;

pub fn covid_myth() -> DemoScenario {
    DemoScenario::new(
        "covid_myth",
        "Health Misinformation",
        85,
        "URGENT: Govt doctors don't want you to know! Drinking hot water with turmeric and cow urine 3 times daily COMPLETELY prevents COVID-19! Big pharma hiding this truth! Share with 10 friends immediately for protection! 🙏",
    )
}

pub fn whatsapp_forward() -> DemoScenario {
    DemoScenario::new(
        "whatsapp_forward",
        "WhatsApp Scam",
        90,
        "Good morning! 🌅 Reliance Jio is giving FREE 1TB data to first 1000 people who forward this message to 20 contacts. Offer valid till tonight only! Don't miss this golden opportunity! Forward now! 📱💯",
    )
}

pub fn political_deepfake() -> DemoScenario {
    DemoScenario::new(
        "political_deepfake",
        "Political Misinformation",
        95,
        "LEAKED VIDEO: Opposition leader caught taking Rs 500 crore bribe! Media hiding this scandal! Watch before it gets deleted! Share everywhere! This will change election results! 🔥🔥",
    )
}

pub fn financial_scam() -> DemoScenario {
    DemoScenario::new(
        "financial_scam",
        "Financial Fraud",
        100,
        "🎉 CONGRATULATIONS! You have won Rs 25 LAKH in Modi Government's Digital India Lottery! Claim your prize by clicking this link and providing Aadhaar details. Limited time offer! 💰",
    )
}

pub fn fake_news() -> DemoScenario {
    DemoScenario::new(
        "fake_news",
        "Fake Scientific Claims",
        75,
        "BREAKING: Scientists at IIT Delhi discover new element that can solve India's energy crisis! This revolutionary finding will make petrol price Rs 5 per liter! Government trying to suppress this news!",
    )
}

pub fn reliable_content() -> DemoScenario {
    DemoScenario::new(
        "reliable_content",
        "Credible Information",
        10,
        "According to a peer-reviewed study published in The Lancet by researchers at AIIMS Delhi, the new COVID-19 variant shows 15% increased transmissibility. The study, conducted over 6 months with 10,000 participants, suggests continued mask usage in crowded areas. Full paper available at doi.org/example",
    )
}

/// All built-in scenarios, in catalogue order.
pub fn all() -> Vec<DemoScenario> {
    vec![
        covid_myth(),
        whatsapp_forward(),
        political_deepfake(),
        financial_scam(),
        fake_news(),
        reliable_content(),
    ]
}
