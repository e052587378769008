// src/content/profile.rs
use crate::types::{Education, Experience, Profile, Skills, ToolSkill};

pub const PROFILE: Profile = Profile {
    name: "Paras Khosla",
    headline: "Hi, I'm Paras Khosla",
    title: "Embedded & Software Developer",
    description: "I am an Embedded & Software Engineer with a passion for turning complex data into clear, actionable insights. With hands-on experience in dashboard development, cloud integration, and embedded systems, I bring a blend of technical expertise and a strong commitment to delivering reliable, high-quality solutions. Organized, driven, and eager to learn, I thrive on challenges and continuously aim for excellence in every project I undertake.",
    background_video: "https://res.cloudinary.com/djraxo05u/video/upload/v1754088242/Home_xqlh4i.mp4",
    profile_image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752008523/profile_jwxz4v.jpg",
    about_heading: "Innovation with Purpose",
    about_summary: "With experience in software development and embedded systems, I build solutions that are both efficient and impactful. I specialize in Full-stack development, cloud integration, and dashboards. From internships to personal projects, I turn complex ideas into working systems.",
    location: "Eindhoven, Netherlands",
    email: "prskhsl@gmail.com",
    linkedin: "https://www.linkedin.com/in/paraskhosla/",
    instagram: "https://www.instagram.com/khoslaparas_k.p/",
    tagline: "Software developer with passion for development and exciting innovation",
    specializations: &[
        "Azure DevOps",
        "Software developer",
        "Embedded systems",
        "PowerBi",
        "Test automation",
    ],
};

pub const SKILLS: Skills = Skills {
    areas: &[
        "Embedded Systems",
        "Software Development",
        "Cloud & Monitoring",
        "IoT & Sensors",
        "Git & CI/CD",
        "Test Automation",
    ],
    tools: &[
        ToolSkill {
            name: "Embedded Systems (STM32, Microcontrollers)",
            level: 80,
        },
        ToolSkill {
            name: "Cloud & Azure (Functions, Storage, App Insights)",
            level: 80,
        },
        ToolSkill {
            name: "Automation (Python, Bash)",
            level: 70,
        },
        ToolSkill {
            name: "CI/CD & Git",
            level: 70,
        },
        ToolSkill {
            name: "Dashboards (Power BI, Grafana, SCOM)",
            level: 70,
        },
        ToolSkill {
            name: "Test Automation (Postman, Tosca)",
            level: 60,
        },
    ],
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "DAF Trucks N.V.",
        role: "Cloud Integration & Dashboard Engineer",
        location: "Eindhoven",
        period: "Feb 2025 – Jun 2025",
        highlights: &[
            "Developed dashboards in SCOM and Power BI to monitor system health and project performance after new releases",
            "Implemented Azure Functions to send certificate meta data to Application Insights",
            "Certificate expiration monitoring apps deployed on DAF servers",
            "Worked closely with engineers to define dashboard metrics and validate data",
        ],
    },
    Experience {
        company: "Versuni (formerly Philips)",
        role: "Embedded Software & Machine learning Engineer",
        location: "Drachten",
        period: "Sept 2023 – Jan 2024",
        highlights: &[
            "Integrated an LIS2DH12 accelerometer with STM32 firmware for real-time motion data",
            "Improved sensor data accuracy by optimizing embedded algorithms with the dev team",
            "Collected and logged embedded sensor data for model training",
            "Developed a deep learning model to enhance floor-type detection performance",
            "Applied machine learning to real-world embedded systems for smarter device behavior",
        ],
    },
    Experience {
        company: "Color Change Detection – Robot Lab IoT",
        role: "Embedded & Computer Vision Engineer",
        location: "Eindhoven",
        period: "Feb 2023 – June 2024",
        highlights: &[
            "Developed a computer vision system on NVIDIA Jetson TX2 to detect color changes in chemical reactions",
            "Applied OpenCV for real-time image processing to capture subtle color variations",
            "Created a pipeline storing video streams in MongoDB with Grafana dashboards for visualization",
            "Explored applications in chemical monitoring, process automation, and industrial IoT",
            "Collaborated in a multidisciplinary team, combining IoT, vision, and data analytics for real-time monitoring",
        ],
    },
    Experience {
        company: "Chidoz",
        role: "Crew Member",
        location: "Eindhoven",
        period: "Dec 2022 – Sept 2023",
        highlights: &[
            "Developed culinary skills and food preparation techniques in a fast-paced kitchen environment",
            "Gained experience in teamwork and communication within a multicultural work environment",
            "Learned time management and efficiency in high-pressure situations",
            "Enhanced customer service skills and attention to detail",
            "Built adaptability and problem-solving skills in a dynamic work environment",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        program: "Information & Communication Technology",
        institution: "Fontys University of Applied Sciences",
        year: 2025,
    },
    Education {
        program: "Mechanical Engineering",
        institution: "Govt. Polytechnic College",
        year: 2020,
    },
];
