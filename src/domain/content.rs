//! The portfolio dataset. Fixed at compile time; everything here is
//! display-only input for the presentation layer.

use super::models::{
    EducationEntry, ExperienceEntry, Profile, Project, ProjectLinks, SkillCategory,
};

pub static PROFILE: Profile = Profile {
    name: "Saiteja Kottapally",
    title: "DevOps / Site Reliability Engineer",
    email: "kottapallysaiteja@gmail.com",
    phone: "9581876090",
    linkedin: "https://linkedin.com/in/1919teja",
    github: "https://github.com/1919teja",
    website: "https://thesaiteja.loopout.in",
    summary: "Experienced DevOps/Site Reliability Engineer with a strong background in \
cloud infrastructure, DevOps automation, and full-stack observability. Proficient in \
AWS, Azure, Kubernetes, Docker, and GitOps tools like Helm and FluxCD. Skilled in \
building robust CI/CD pipelines and automating infrastructure with Python/Bash. Proven \
track record in incident management and on-call operations for distributed microservices.",
};

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Cloud & Containers",
        skills: &[
            "Amazon AWS (EKS, EC2, S3)",
            "Azure (AKS)",
            "Google Cloud Platform",
            "Docker",
            "Kubernetes",
            "Helm",
            "FluxCD",
        ],
    },
    SkillCategory {
        category: "Infrastructure & Automation",
        skills: &[
            "Terraform",
            "Ansible",
            "CloudFormation",
            "Bash Scripting",
            "Python",
            "Jenkins",
            "GitHub Actions",
            "GitLab CI",
        ],
    },
    SkillCategory {
        category: "Observability & Security",
        skills: &[
            "New Relic",
            "Dynatrace",
            "Prometheus",
            "Grafana",
            "ELK Stack",
            "DataDog",
            "Cloudflare WAF",
            "SSL/TLS",
            "VPN",
        ],
    },
    SkillCategory {
        category: "Databases & Dev",
        skills: &[
            "MySQL",
            "Redis",
            "MongoDB",
            "DynamoDB",
            "JavaScript",
            "React",
            "Django",
            "Postman",
        ],
    },
    SkillCategory {
        category: "AI & Future Tech",
        skills: &[
            "GenAI (ChatGPT)",
            "New Relic AI",
            "Datadog AIOps",
            "Quantum Computing Simulation",
        ],
    },
];

pub static EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "GlobalLogic",
        role: "DevOps/Site Reliability Engineer",
        period: "August 2024 - Present",
        highlights: &[
            "Designed and optimized AWS EKS clusters including upgrades, node group management, and scaling.",
            "Built multi-service AWS infrastructure using Terraform (VPC, RDS, ALB, SQS, SNS, IAM, etc.).",
            "Implemented CI/CD pipelines using GitHub Actions, Bitbucket, and CircleCI for automated builds.",
            "Managed Azure Kubernetes Service (AKS) using Helm and FluxCD-driven GitOps workflows.",
            "Implemented AI-driven anomaly detection using New Relic Lookout AIOPS for faster MTTR.",
            "Designed and maintained GitLab pipelines for automated container builds and Helm packaging.",
        ],
    },
    ExperienceEntry {
        company: "Tech Mahindra",
        role: "Site Reliability Engineer",
        period: "May 2024 - August 2024",
        highlights: &[
            "Delivered high-quality Infrastructure as Code (IaC) solutions using Terraform and Ansible on AWS.",
            "Built and managed Jenkins CI/CD pipelines to automate provisioning and deployment processes.",
            "Resolved complex issues in production environments, improving overall system stability.",
            "Ensured SLAs and KPIs were consistently met through transparent risk management.",
        ],
    },
    ExperienceEntry {
        company: "Lotuswave Software Solutions",
        role: "DevOps/SRE Engineer",
        period: "April 2021 - May 2024",
        highlights: &[
            "Managed high-availability workloads in AWS, ensuring disaster recovery and resiliency.",
            "Implemented full-stack observability with New Relic and Dynatrace to improve system reliability.",
            "Automated routine tasks with Python, significantly reducing manual effort and latency.",
            "Configured Cloudflare for WAF and DDoS protection, reducing latency by 30%.",
            "Designed HA architectures achieving 99.99% uptime through performance testing and capacity planning.",
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "DevOps Automation QA-Portal",
        description: "Internal website for QA teams to automate functional and regression \
testing on target websites. Integrated with Python, Shell, Jenkins, and Ansible.",
        technologies: &["Python", "Shell", "Jenkins", "Ansible", "DevOps"],
        links: ProjectLinks {
            github: Some("https://github.com/lotuswave/qaporta"),
            youtube: None,
        },
    },
    Project {
        title: "AI Based Assistant System for Blind",
        description: "Smart India Hackathon finalist. AI-powered assistant using a \
voice-enabled bot and smart cameras as a self-learning companion for visually impaired users.",
        technologies: &["Python", "AI", "Voice Assistant"],
        links: ProjectLinks {
            github: None,
            youtube: Some("https://www.youtube.com/watch?v=Rcc5g07ppsI"),
        },
    },
    Project {
        title: "Quantum Computing Simulation",
        description: "Designed an 8-bit Qubit simulated chip prototype simulating multiple \
quantum algorithms using IBM Quantum at JNTU.",
        technologies: &["Quantum Computing", "IBM Quantum", "Algorithm Simulation"],
        links: ProjectLinks {
            github: None,
            youtube: None,
        },
    },
];

pub static EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "Jawaharlal Nehru Technological University",
        degree: "Bachelor of Technology, Electronics and Communication",
        period: "2017-2021",
        grade: "7.5 CGPA",
    },
    EducationEntry {
        institution: "Kendriya Vidyalaya Sangathan, Warangal",
        degree: "Senior Secondary (+2), MPC Computer Science",
        period: "2015-2017",
        grade: "7.0 CGPA",
    },
];
