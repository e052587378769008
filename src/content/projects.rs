// src/content/projects.rs
use crate::types::Project;

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "VSS Insights",
        description: "Dashboards from DAF internship, visualizing VSS metrics and certificate expirations with Power BI, SCOM, and Azure DevOps App Insights for real-time monitoring",
        image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752008111/daf_intern_image_bzc3sf.jpg",
        tags: &["Azure DevOps", ".Net Framework", "Power Bi"],
        case_study_url: Some("https://paraskhosla.github.io/Portfolio_website/Daf_Internship_Product_System_Design_Document.pdf"),
        demo_url: Some("https://paraskhosla.github.io/Portfolio_website/Daf_Dashboard_Demo.pdf"),
    },
    Project {
        id: "2",
        title: "Floor Detection using ML",
        description: "Implemented LIS2DH12 sensor and developed deep learning model to classify floor type using motor current data. Achieved 70% accuracy via tuning",
        image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752007180/philips_tcdcum.jpg",
        tags: &["LIS2DH12", "Python", "Deep Learning"],
        case_study_url: Some("https://paraskhosla.github.io/Portfolio_website/Versuni_Internship_Research_Report_signed.pdf"),
        demo_url: Some("https://paraskhosla.github.io/Portfolio_website/versuni-presentation.pdf"),
    },
    Project {
        id: "3",
        title: "Color Detection with OpenCV",
        description: "A real-time color change detection system using the Jetson TX2's onboard camera like cabbage water, enabling real-world chemical reaction analysis directly at the edge",
        image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752007829/colordetect_celjua.jpg",
        tags: &["Jetson TX2", "Python", "OpenCV"],
        case_study_url: Some("https://paraskhosla.github.io/Portfolio_website/Color_Change_detection.pdf"),
        demo_url: Some("https://youtu.be/j5ihSZjRxy4"),
    },
    Project {
        id: "4",
        title: "Cricket Learning App",
        description: "A sleek Figma prototype designed to help beginners understand the basics of cricket through visual guides and engaging UI tailored for mobile users",
        image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752007286/Minor_r6wzxm.png",
        tags: &["Figma", "Research", "Design"],
        case_study_url: Some("https://miro.com/app/board/uXjVLbGmNv4=/?share_link_id=307061218433"),
        demo_url: Some("https://www.figma.com/proto/PxFOOiLLVXVehnuxh7NtgA/Personal-project-cricket-learning-app?page-id=33%3A39&node-id=2053-221&p=f&viewport=327%2C1042%2C0.27&t=hUcoJ74u279vFOCa-1&scaling=scale-down&content-scaling=fixed&starting-point-node-id=2053%3A221"),
    },
    Project {
        id: "5",
        title: "Bluetooth-Controlled Rover",
        description: "A 4WD Bluetooth-controlled rover built with ESP32, navigated using the Dabble app for seamless wireless control and mobility.",
        image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752007285/Screenshot_4_jcdyia.png",
        tags: &["C/C++", "PWM", "4-Motor Drive"],
        case_study_url: Some("https://paraskhosla.github.io/Portfolio_website/Smart_car_using_BL.pdf"),
        demo_url: Some("https://youtu.be/9DCF5yQoPSY"),
    },
    Project {
        id: "6",
        title: "Thingy 91 Configuration",
        description: "IoT Communication and Infrastructure project using Thingy 91 microcontroller with LTE-M, NB-IoT, and GNSS connectivity",
        image: "https://res.cloudinary.com/djraxo05u/image/upload/v1752007183/thingy91_qfqhif.png",
        tags: &["GNSS", "IOT", "VS Code"],
        case_study_url: Some("https://paraskhosla.github.io/Portfolio_website/thingy91-report.pdf"),
        demo_url: Some("https://github.com/paraskhosla/Thingy91-code/tree/main/src"),
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LinkAction, ProjectLink};

    #[test]
    fn test_project_table() {
        assert_eq!(PROJECTS.len(), 6);
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
        assert_eq!(find_project("3").map(|p| p.title), Some("Color Detection with OpenCV"));
        assert!(find_project("42").is_none());
    }

    #[test]
    fn test_demo_video_opens_externally() {
        let rover = find_project("5").unwrap();
        assert!(matches!(
            rover.link_action(ProjectLink::CaseStudy),
            Some(LinkAction::ViewDocument { .. })
        ));
        assert!(matches!(
            rover.link_action(ProjectLink::Demo),
            Some(LinkAction::OpenExternal { .. })
        ));
    }
}
