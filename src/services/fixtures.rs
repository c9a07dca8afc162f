use crate::models::{CareerLink, CareerLinkKind, Event, EventMode, PeerProfile};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo event pool, created once at startup.
pub fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: "e1".to_string(),
            title: "Intro to Google Cloud + Firebase".to_string(),
            date: "2025-09-15".to_string(),
            mode: EventMode::OnCampus,
            venue: "CSE Seminar Hall".to_string(),
            tags: strings(&["cloud", "firebase", "backend"]),
            link: "https://cloud.google.com".to_string(),
        },
        Event {
            id: "e2".to_string(),
            title: "Build your first Android App".to_string(),
            date: "2025-09-21".to_string(),
            mode: EventMode::Hybrid,
            venue: "Lab 3 / Meet".to_string(),
            tags: strings(&["android", "kotlin", "ui"]),
            link: "https://developer.android.com".to_string(),
        },
        Event {
            id: "e3".to_string(),
            title: "GenAI + Vertex AI Hands-on".to_string(),
            date: "2025-10-02".to_string(),
            mode: EventMode::Online,
            venue: "Google Meet".to_string(),
            tags: strings(&["genai", "vertex", "ml"]),
            link: "https://cloud.google.com/vertex-ai".to_string(),
        },
    ]
}

/// Demo peer profile pool, created once at startup and never mutated.
pub fn demo_profiles() -> Vec<PeerProfile> {
    vec![
        PeerProfile {
            id: "u1".to_string(),
            name: "Amit Sharma".to_string(),
            year: "3rd Year".to_string(),
            branch: "CSE".to_string(),
            skills: strings(&["android", "kotlin", "ui"]),
            looking_for: strings(&["teammates", "mentorship"]),
            bio: "Android + Compose enthusiast.".to_string(),
        },
        PeerProfile {
            id: "u2".to_string(),
            name: "Riya Verma".to_string(),
            year: "2nd Year".to_string(),
            branch: "IT".to_string(),
            skills: strings(&["cloud", "firebase", "backend"]),
            looking_for: strings(&["hackathons"]),
            bio: "Cloud newbie, wants to learn Firebase.".to_string(),
        },
        PeerProfile {
            id: "u3".to_string(),
            name: "Mohit Agarwal".to_string(),
            year: "4th Year".to_string(),
            branch: "AI/DS".to_string(),
            skills: strings(&["ml", "genai", "python"]),
            looking_for: strings(&["research", "mentorship"]),
            bio: "ML + GenAI projects, research focused.".to_string(),
        },
        PeerProfile {
            id: "u4".to_string(),
            name: "Neha Singh".to_string(),
            year: "1st Year".to_string(),
            branch: "ECE".to_string(),
            skills: strings(&["ui", "figma", "web"]),
            looking_for: strings(&["study-group"]),
            bio: "Design + web basics, exploring coding.".to_string(),
        },
    ]
}

/// Curated career resource board.
pub fn career_links() -> Vec<CareerLink> {
    vec![
        CareerLink {
            title: "Google Summer of Code (GSoC)".to_string(),
            url: "https://summerofcode.withgoogle.com/".to_string(),
            kind: CareerLinkKind::Program,
        },
        CareerLink {
            title: "Google Cloud Skills Boost".to_string(),
            url: "https://www.cloudskillsboost.google/".to_string(),
            kind: CareerLinkKind::Learning,
        },
        CareerLink {
            title: "Android Basics with Compose".to_string(),
            url: "https://developer.android.com/courses".to_string(),
            kind: CareerLinkKind::Learning,
        },
        CareerLink {
            title: "STEP Program".to_string(),
            url: "https://buildyourfuture.withgoogle.com/programs/step/".to_string(),
            kind: CareerLinkKind::Internship,
        },
        CareerLink {
            title: "Hash Code / Kick Start".to_string(),
            url: "https://codingcompetitionsonair.withgoogle.com/".to_string(),
            kind: CareerLinkKind::Contest,
        },
    ]
}
