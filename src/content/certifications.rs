// src/content/certifications.rs
use crate::types::Certification;

/// Certifications shown before "show all" is toggled.
pub const COLLAPSED_COUNT: usize = 3;

const AZURE_FUNDAMENTALS_BADGE: &str = "https://images.credly.com/size/340x340/images/70eb1e3f-d4de-4377-a062-b20fb29594ea/azure-data-fundamentals-600x600.png";

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "1",
        title: "AZ-104: Prerequisites for Azure administrators",
        issuer: "Microsoft",
        date: "2025",
        image: Some("https://images.credly.com/size/340x340/images/be8fcaeb-c769-4858-b567-ffaaa73ce8cf/image.png"),
        credential_url: Some("https://learn.microsoft.com/en-us/users/paras-5519/achievements/d9vf9rnj?ref=https%3A%2F%2Fwww.linkedin.com%2F"),
        skills: &["Azure Administration", "Virtual Machines", "Identity Management"],
    },
    Certification {
        id: "2",
        title: "AZ-900: Azure management and governance",
        issuer: "Microsoft",
        date: "2025",
        image: Some("https://images.credly.com/size/340x340/images/4136ced8-75d5-4afb-8677-40b6236e2672/azure-ai-fundamentals-600x600.png"),
        credential_url: Some("https://learn.microsoft.com/api/achievements/share/en-us/Paras-5519/CXDXBQU9?sharingId=643E3676904F0C54"),
        skills: &["Cloud Concepts", "Azure Pricing", "Governance"],
    },
    Certification {
        id: "3",
        title: "AZ-500: Secure compute, storage, and databases",
        issuer: "Microsoft",
        date: "2025",
        image: Some(AZURE_FUNDAMENTALS_BADGE),
        credential_url: Some("https://learn.microsoft.com/api/achievements/share/en-us/Paras-5519/JU47YJDT?sharingId=643E3676904F0C54"),
        skills: &["Identity & Access Management", "Network Security", "Monitoring"],
    },
    Certification {
        id: "4",
        title: "AZ-400: Implement CI with Azure Pipelines and GitHub Actions",
        issuer: "Microsoft",
        date: "2025",
        image: Some(AZURE_FUNDAMENTALS_BADGE),
        credential_url: Some("https://learn.microsoft.com/en-us/users/paras-5519/achievements/3a3d8uah"),
        skills: &["CI/CD", "GitHub", "Pipelines"],
    },
    Certification {
        id: "5",
        title: "AZ-700 Design and Implement Microsoft Azure Network Solutions",
        issuer: "Microsoft",
        date: "2025",
        image: Some(AZURE_FUNDAMENTALS_BADGE),
        credential_url: Some("https://learn.microsoft.com/en-us/users/paras-5519/achievements/9y94knxu"),
        skills: &["Networking", "VPN", "Firewalls"],
    },
    Certification {
        id: "6",
        title: "Introduction to Kubernetes on Azure",
        issuer: "Microsoft",
        date: "2025",
        image: Some(AZURE_FUNDAMENTALS_BADGE),
        credential_url: Some("https://learn.microsoft.com/en-us/users/paras-5519/achievements/h7h9bg78"),
        skills: &["Kubernetes", "AKS", "Containers"],
    },
    Certification {
        id: "7",
        title: "Introduction to generative AI concepts",
        issuer: "Microsoft",
        date: "2025",
        image: Some(AZURE_FUNDAMENTALS_BADGE),
        credential_url: Some("https://learn.microsoft.com/en-us/users/paras-5519/achievements/8z8sp4gw"),
        skills: &["GenAI", "Prompting", "AI Ethics"],
    },
    Certification {
        id: "8",
        title: "ICT & Technology Semester Advanced (FTRBSpring2024BSC)",
        issuer: "Fontys University",
        date: "2024",
        image: None,
        credential_url: Some("https://www.edubadges.nl/public/assertions/sjERzbG5RzaK-g00419__A"),
        skills: &["System Architecture", "Software Design", "Solution Engineering"],
    },
    Certification {
        id: "9",
        title: "ICT & Smart Industry Semester 4 (FTRBSPRN2023BSC)",
        issuer: "Fontys University",
        date: "2023",
        image: None,
        credential_url: Some("https://www.edubadges.nl/public/assertions/KN7jJy0vSAefDtz2SOePgg"),
        skills: &["Industrial Automation", "CI/CD Pipelines", "DevOps Practices"],
    },
    Certification {
        id: "10",
        title: "ICT & Technology Semester 3 (FTCBFALL2022BSC)",
        issuer: "Fontys University",
        date: "2023",
        image: None,
        credential_url: Some("https://www.edubadges.nl/public/assertions/QZ2u7AJmSpCgLzvhqkKq4g"),
        skills: &["Object-Oriented Programming", "Software Testing", "System Modeling"],
    },
    Certification {
        id: "11",
        title: "ICT & Technology Semester 2 (FTCBSPRN2022BSC)",
        issuer: "Fontys University",
        date: "2022",
        image: None,
        credential_url: Some("https://www.edubadges.nl/public/assertions/zv8rJnxuSu6ZQomq-wEgdg"),
        skills: &["Agile Methodology", "Scrum Framework", "Team Collaboration"],
    },
    Certification {
        id: "12",
        title: "ICT & Technology Semester 1 (FTCBSPRN2021)",
        issuer: "Fontys University",
        date: "2021",
        image: None,
        credential_url: Some("https://www.edubadges.nl/public/assertions/ltsq2Vl4QyOw8JUi3TL_6g"),
        skills: &["Relational Databases", "SQL Basics", "Data Modeling"],
    },
];

/// The gallery shows the first few certifications until "show all" is on.
pub fn displayed_certifications(show_all: bool) -> &'static [Certification] {
    if show_all {
        CERTIFICATIONS
    } else {
        &CERTIFICATIONS[..COLLAPSED_COUNT.min(CERTIFICATIONS.len())]
    }
}

/// Distinct issuers in table order.
pub fn issuers() -> Vec<&'static str> {
    let mut issuers: Vec<&'static str> = Vec::new();
    for certification in CERTIFICATIONS {
        if !issuers.contains(&certification.issuer) {
            issuers.push(certification.issuer);
        }
    }
    issuers
}
