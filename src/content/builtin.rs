use crate::domain::model::{
    CaseStudy, CaseStudyBlock, Education, EducationStat, Experience, ImageRef, Profile, Project,
    SiteContent, SkillCategory, SkillVariant, UxProject,
};
use crate::navigation::CASE_STUDY_PATH;
use std::sync::Arc;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn variant(value: u8) -> SkillVariant {
    SkillVariant::new(value).unwrap_or_default()
}

fn profile() -> Profile {
    Profile {
        name: "Kavish Sharma".to_string(),
        resume_url: "https://media.licdn.com/dms/image/v2/D562DAQFb6O9Yx93NgQ/profile-treasury-image-shrink_1280_1280/B56ZpmvnRQI0AQ-/0/1762660349562?e=1763265600&v=beta&t=Ut4s6aO6f5DSViwddoXZLpKqd6RFTYmtxYfD-h2R5KM".to_string(),
        about: strings(&[
            "I'm a fourth year student from New Delhi studying Computer Science with a minor in English at \
             Arizona State University. I've been a Teaching Assistant for the Math Department at ASU since 2023, \
             working with MAT 114 (College Math), MAT 210 (Brief Calculus), and MAT 265 (Calculus for Engineers).",
            "I'm also a Grader for first-year English classes (ENG 101 and 102) at the Learning Enterprise. \
             Last summer I interned at CerebrumX in a Data Engineering capacity.",
            "My classes have covered cryptography, data science, and human-computer interaction. \
             I'm interested in how cryptography and data science get used in healthcare and finance. \
             Both industries handle sensitive information at scale, and the technical challenges around security \
             and analysis seem worth paying attention to.",
            "I'm still early in my career, but I'm trying to learn as much as I can and figure out where I can \
             contribute something useful.",
        ]),
        image: ImageRef {
            src: "/assets/cat.jpg".to_string(),
            alt: "Profile".to_string(),
        },
        footer: "© 2025 Kavish Sharma".to_string(),
    }
}

fn education() -> Education {
    Education {
        institution: "Arizona State University".to_string(),
        degree: "B.S. Computer Science, Minor in English".to_string(),
        dates: "Aug 2022 - May 2026".to_string(),
        icon: "🎓".to_string(),
        stats: [("GPA", "3.8"), ("Year", "Senior"), ("Location", "Tempe, AZ")]
            .into_iter()
            .map(|(label, value)| EducationStat {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
        coursework: strings(&[
            "Data Structures & Algorithms",
            "Operating Systems",
            "Database Management",
            "Cryptography",
            "Human-Computer Interaction",
            "Data Science",
            "Software Engineering",
            "Computer Networks",
        ]),
        activities: strings(&[
            "Teaching Assistant, School of Mathematics (2023 - Present)",
            "Grader, First-Year English Composition (2024 - Present)",
        ]),
    }
}

fn experiences() -> Vec<Arc<Experience>> {
    vec![
        Arc::new(Experience {
            title: "Data Engineering Intern".to_string(),
            company: "CerebrumX".to_string(),
            period: "(Summer 2025)".to_string(),
            points: strings(&[
                "Built Kafka-based data pipeline with Docker to process 50K+ daily vehicle telemetry events.",
                "Integrated MongoDB and ClickHouse for analytics, achieving 8x faster queries.",
                "Implemented geospatial indexing & anomaly detection, reducing false positives by 40%.",
            ]),
        }),
        Arc::new(Experience {
            title: "AI-Powered Prediction of Protein Thermal Stability".to_string(),
            company: "Capstone Project".to_string(),
            period: "(2025 - Present)".to_string(),
            points: strings(&[
                "Engineered features from protein sequence and structure data (FASTA, PDB).",
                "Built & trained regression models in Python (Random Forest, Neural Networks).",
                "Developed pipelines for large biological datasets with RMSE, MAE, R² evaluation.",
            ]),
        }),
        Arc::new(Experience {
            title: "Math Instructional Aide".to_string(),
            company: "School of Mathematics, ASU".to_string(),
            period: "(2023 - Present)".to_string(),
            points: strings(&[
                "Graded 50+ assignments weekly for Calculus and College Math using structured rubrics.",
                "Led bi-weekly group discussions of 6-10 students on challenging concepts.",
                "Developed supplementary materials that improved comprehension for 130+ students.",
            ]),
        }),
    ]
}

fn projects() -> Vec<Arc<Project>> {
    [
        (
            "SecureVault Password Manager",
            "A command line password manager using AES encryption and PBKDF2 for key derivation, with password protected access.",
            "https://github.com/ksharm-67/SecureVault",
        ),
        (
            "Vehicle Telemetry Pipeline",
            "A secure data pipeline using Kafka to ingest vehicle data and detect anomalies like geofence breaches and GPS spoofing.",
            "https://github.com/ksharm-67/CerebrumX-Internship",
        ),
        (
            "Diffie-Hellman Key Encryption",
            "Performs key exchange using a 256-bit key, then uses AES symmetric encryption to encrypt and decrypt data.",
            "https://github.com/ksharm-67/Diffie-Hellman-Key-Encryption",
        ),
        (
            "RSA Encryption",
            "Implements the Extended Euclidean Algorithm for private key generation and RSA encryption of plaintext.",
            "https://github.com/ksharm-67/RSA-Encryption",
        ),
    ]
    .into_iter()
    .map(|(title, description, link)| {
        Arc::new(Project {
            title: title.to_string(),
            description: description.to_string(),
            link: Some(link.to_string()),
        })
    })
    .collect()
}

fn skill_categories() -> Vec<Arc<SkillCategory>> {
    vec![
        Arc::new(SkillCategory {
            title: "Programming".to_string(),
            variant: variant(1),
            skills: strings(&["C++", "Python", "Java", "JavaScript", "SQL", "HTML/CSS", "MATLAB", "R"]),
        }),
        Arc::new(SkillCategory {
            title: "Frameworks/Libraries".to_string(),
            variant: variant(2),
            skills: strings(&["Firebase", "React.js", "Flask", "Pandas", "NumPy", "PyTorch", "Kafka"]),
        }),
        Arc::new(SkillCategory {
            title: "Databases".to_string(),
            variant: variant(3),
            skills: strings(&["MongoDB", "ClickHouse", "PostgreSQL"]),
        }),
        Arc::new(SkillCategory {
            title: "Tools/Platforms".to_string(),
            variant: variant(4),
            skills: strings(&["Git", "GitHub", "Docker", "Jira", "Linux", "VS Code"]),
        }),
        Arc::new(SkillCategory {
            title: "Concepts".to_string(),
            variant: variant(5),
            skills: strings(&[
                "OAuth2",
                "REST APIs",
                "OOP",
                "Functional Programming",
                "Multithreading",
                "Unit Testing",
                "Agile",
                "Cryptographic Protocols",
                "Big O",
                "CRUD Operations",
            ]),
        }),
    ]
}

fn ux_projects() -> Vec<Arc<UxProject>> {
    vec![Arc::new(UxProject {
        title: "RateMyProfessor Redesign".to_string(),
        date: "Fall 2024".to_string(),
        tools: strings(&["Figma", "Miro", "Maze"]),
        description: "A usability study and redesign of the professor search and rating flow, \
                      from interviews and affinity mapping to a tested high-fidelity prototype."
            .to_string(),
        link: CASE_STUDY_PATH.to_string(),
    })]
}

fn case_study() -> CaseStudy {
    let heading = |text: &str| CaseStudyBlock::Heading {
        text: text.to_string(),
    };
    let paragraph = |text: &str| CaseStudyBlock::Paragraph {
        text: text.to_string(),
    };
    let image = |src: &str, alt: &str| CaseStudyBlock::Image {
        src: src.to_string(),
        alt: alt.to_string(),
    };

    CaseStudy {
        path: CASE_STUDY_PATH.to_string(),
        title: "RateMyProfessor Redesign".to_string(),
        subtitle: "UI/UX Case Study · Human-Computer Interaction · Fall 2024".to_string(),
        blocks: vec![
            heading("Problem"),
            paragraph(
                "Students rely on professor ratings when planning a semester, but finding a professor \
                 and comparing reviews took too many steps and buried the information students cared about.",
            ),
            image("/assets/rmp-current.png", "Current RateMyProfessor search results"),
            heading("Research"),
            paragraph(
                "Eight student interviews and a task-based usability test surfaced three recurring pain \
                 points: noisy search results, inconsistent rating breakdowns, and no way to compare professors side by side.",
            ),
            image("/assets/rmp-affinity.png", "Affinity map of interview findings"),
            heading("Redesign"),
            paragraph(
                "The redesign groups results by course, puts difficulty and take-again ratings up front, \
                 and adds a comparison view for up to three professors.",
            ),
            image("/assets/rmp-prototype.png", "High-fidelity prototype of the comparison view"),
            heading("Outcome"),
            paragraph(
                "In a second round of testing, participants finished the comparison task faster and rated \
                 the new flow as easier to scan.",
            ),
        ],
    }
}

/// 內建內容：網站原本寫死在頁面裡的資料
pub fn builtin() -> SiteContent {
    SiteContent {
        profile: profile(),
        education: Some(education()),
        experiences: experiences(),
        projects: projects(),
        skill_categories: skill_categories(),
        ux_projects: ux_projects(),
        case_study: Some(case_study()),
    }
}
