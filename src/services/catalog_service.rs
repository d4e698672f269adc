//! services/catalog_service.rs
//! Catalog Provider: lista estática en memoria, de sólo lectura.
//! El pipeline de registro únicamente consume id y title.

use std::sync::Arc;

use crate::models::opportunity_model::{CatalogFilter, Category, DeliveryMode, Opportunity};

#[derive(Clone)]
pub struct CatalogService {
    opportunities: Arc<Vec<Opportunity>>,
}

impl CatalogService {
    pub fn new() -> Self {
        CatalogService {
            opportunities: Arc::new(seed_catalog()),
        }
    }

    /// Filtrado en memoria: categoría, modalidad y búsqueda de texto
    /// (título, descripción o empresa, sin distinguir mayúsculas).
    pub fn list(&self, filter: &CatalogFilter) -> Vec<Opportunity> {
        self.opportunities
            .iter()
            .filter(|op| filter.category.map_or(true, |c| op.category == c))
            .filter(|op| filter.mode.map_or(true, |m| op.mode == m))
            .filter(|op| match &filter.search {
                Some(q) if !q.is_empty() => {
                    let q = q.to_lowercase();
                    op.title.to_lowercase().contains(&q)
                        || op.description.to_lowercase().contains(&q)
                        || op.company.to_lowercase().contains(&q)
                }
                _ => true,
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Opportunity> {
        self.opportunities.iter().find(|op| op.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_catalog() -> Vec<Opportunity> {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Opportunity {
            id: "1".to_string(),
            title: "Web Development Hackathon 2026".to_string(),
            description: "Build innovative web applications in 24 hours and compete \
                          for prizes. Open to developers of all levels."
                .to_string(),
            category: Category::Hackathon,
            mode: DeliveryMode::Online,
            company: "TechCorp".to_string(),
            location: Some("Virtual".to_string()),
            start_date: "2026-03-15".to_string(),
            end_date: "2026-03-16".to_string(),
            registration_deadline: "2026-03-10".to_string(),
            prize: Some("₹2,00,000".to_string()),
            skills: Some(owned(&["JavaScript", "React", "Node.js", "MongoDB"])),
            eligibility: Some("Open to all, Age 18+".to_string()),
        },
        Opportunity {
            id: "2".to_string(),
            title: "AI & Machine Learning Challenge".to_string(),
            description: "Solve real-world AI problems, from model development to \
                          deployment."
                .to_string(),
            category: Category::Competition,
            mode: DeliveryMode::Online,
            company: "DataMinds".to_string(),
            location: Some("Virtual".to_string()),
            start_date: "2026-03-20".to_string(),
            end_date: "2026-04-20".to_string(),
            registration_deadline: "2026-03-18".to_string(),
            prize: Some("₹5,00,000".to_string()),
            skills: Some(owned(&["Python", "TensorFlow", "scikit-learn"])),
            eligibility: Some("Students and professionals".to_string()),
        },
        Opportunity {
            id: "3".to_string(),
            title: "Summer Internship - Software Development".to_string(),
            description: "Three-month internship working on real projects with \
                          experienced mentors."
                .to_string(),
            category: Category::Internship,
            mode: DeliveryMode::Hybrid,
            company: "InnovateTech".to_string(),
            location: Some("Bangalore".to_string()),
            start_date: "2026-05-01".to_string(),
            end_date: "2026-07-31".to_string(),
            registration_deadline: "2026-04-15".to_string(),
            prize: None,
            skills: Some(owned(&["Java", "Spring Boot", "SQL"])),
            eligibility: Some("Undergraduate students".to_string()),
        },
        Opportunity {
            id: "4".to_string(),
            title: "Backend Engineer".to_string(),
            description: "Full-time role building distributed services for a \
                          fintech platform."
                .to_string(),
            category: Category::Job,
            mode: DeliveryMode::Offline,
            company: "FinEdge".to_string(),
            location: Some("Mumbai".to_string()),
            start_date: "2026-04-01".to_string(),
            end_date: "2026-12-31".to_string(),
            registration_deadline: "2026-03-25".to_string(),
            prize: None,
            skills: Some(owned(&["Rust", "PostgreSQL", "Kubernetes"])),
            eligibility: Some("2+ years of experience".to_string()),
        },
        Opportunity {
            id: "5".to_string(),
            title: "Women in Tech Scholarship".to_string(),
            description: "Scholarship covering tuition and mentorship for women \
                          entering technology careers."
                .to_string(),
            category: Category::Scholarship,
            mode: DeliveryMode::Online,
            company: "FutureFund".to_string(),
            location: None,
            start_date: "2026-06-01".to_string(),
            end_date: "2027-05-31".to_string(),
            registration_deadline: "2026-05-10".to_string(),
            prize: Some("Full tuition".to_string()),
            skills: None,
            eligibility: Some("Women, Age 18+".to_string()),
        },
        Opportunity {
            id: "6".to_string(),
            title: "Cloud Fundamentals Course".to_string(),
            description: "Six-week guided course on cloud infrastructure with a \
                          certificate on completion."
                .to_string(),
            category: Category::Course,
            mode: DeliveryMode::Online,
            company: "SkillBridge".to_string(),
            location: Some("Virtual".to_string()),
            start_date: "2026-04-10".to_string(),
            end_date: "2026-05-22".to_string(),
            registration_deadline: "2026-04-05".to_string(),
            prize: None,
            skills: Some(owned(&["AWS", "Docker", "Linux"])),
            eligibility: None,
        },
    ]
}
