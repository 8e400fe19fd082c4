//! Demo seed data: the users, clinics and reviews the platform starts with.

use crate::models::{Clinic, ClinicType, Review, Role, User};

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            name: "Rahul Sharma".into(),
            email: "rahul@example.com".into(),
            role: Role::Patient,
            avatar_url: Some("https://picsum.photos/id/1005/200/200".into()),
        },
        User {
            id: "u2".into(),
            name: "Dr. Anjali Gupta".into(),
            email: "anjali@lifecare.com".into(),
            role: Role::Provider,
            avatar_url: Some("https://picsum.photos/id/1011/200/200".into()),
        },
        User {
            id: "u3".into(),
            name: "Admin User".into(),
            email: "admin@pitlabs.com".into(),
            role: Role::Admin,
            avatar_url: None,
        },
    ]
}

pub fn seed_clinics() -> Vec<Clinic> {
    vec![
        Clinic {
            id: "c1".into(),
            name: "LifeCare Dialysis Center".into(),
            address: "12, MG Road, Indiranagar".into(),
            city: "Bangalore".into(),
            state: "Karnataka".into(),
            clinic_type: ClinicType::Dialysis,
            rating: 4.8,
            review_count: 124,
            price_per_session: 1500,
            description: "State-of-the-art hemodialysis facility with certified nephrologists \
                          on call. Clean, hygienic, and tourist-friendly."
                .into(),
            amenities: to_strings(&["Wi-Fi", "Wheelchair Access", "TV", "Private Suites"]),
            image_url: "https://picsum.photos/seed/clinic1/800/600".into(),
            verified: true,
            latitude: Some(12.9716),
            longitude: Some(77.5946),
        },
        Clinic {
            id: "c2".into(),
            name: "City Blood Transfusion Unit".into(),
            address: "45, Link Road, Bandra West".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            clinic_type: ClinicType::Thalassemia,
            rating: 4.5,
            review_count: 89,
            price_per_session: 800,
            description: "Dedicated thalassemia support center providing safe blood \
                          transfusions and chelation therapy support."
                .into(),
            amenities: to_strings(&["Emergency Care", "Counseling", "Play Area"]),
            image_url: "https://picsum.photos/seed/clinic2/800/600".into(),
            verified: true,
            latitude: Some(19.0760),
            longitude: Some(72.8777),
        },
        Clinic {
            id: "c3".into(),
            name: "Wellness Kidney Care".into(),
            address: "Sector 18, Near Metro Station".into(),
            city: "Noida".into(),
            state: "Uttar Pradesh".into(),
            clinic_type: ClinicType::Dialysis,
            rating: 4.2,
            review_count: 56,
            price_per_session: 1200,
            description: "Affordable and reliable kidney care center. Open 24/7 for \
                          emergency sessions."
                .into(),
            amenities: to_strings(&["24/7 Open", "Parking", "Cafeteria"]),
            image_url: "https://picsum.photos/seed/clinic3/800/600".into(),
            verified: false,
            latitude: Some(28.5355),
            longitude: Some(77.3910),
        },
        Clinic {
            id: "c4".into(),
            name: "Goa Renal Retreat".into(),
            address: "Calangute-Baga Road".into(),
            city: "Goa".into(),
            state: "Goa".into(),
            clinic_type: ClinicType::Dialysis,
            rating: 4.9,
            review_count: 210,
            price_per_session: 2500,
            description: "Combine your vacation with care. Luxury dialysis suites \
                          overlooking the serene landscape."
                .into(),
            amenities: to_strings(&["Luxury Suites", "Pick-up/Drop", "Dietary Consult"]),
            image_url: "https://picsum.photos/seed/clinic4/800/600".into(),
            verified: true,
            latitude: Some(15.2993),
            longitude: Some(74.1240),
        },
        Clinic {
            id: "c5".into(),
            name: "Chennai Kidney Institute".into(),
            address: "Anna Nagar West".into(),
            city: "Chennai".into(),
            state: "Tamil Nadu".into(),
            clinic_type: ClinicType::Dialysis,
            rating: 4.7,
            review_count: 150,
            price_per_session: 1350,
            description: "Advanced renal care facility specializing in travel dialysis \
                          for international and domestic tourists."
                .into(),
            amenities: to_strings(&["Interpreter Service", "ISO Certified", "Insurance Accepted"]),
            image_url: "https://picsum.photos/seed/clinic5/800/600".into(),
            verified: true,
            latitude: Some(13.0827),
            longitude: Some(80.2707),
        },
        Clinic {
            id: "c6".into(),
            name: "Capital Thalassemia Care".into(),
            address: "Lajpat Nagar II".into(),
            city: "Delhi".into(),
            state: "Delhi".into(),
            clinic_type: ClinicType::Thalassemia,
            rating: 4.6,
            review_count: 92,
            price_per_session: 600,
            description: "Non-profit supported unit providing highly subsidized \
                          transfusion services for travelers."
                .into(),
            amenities: to_strings(&["Subsidized Cost", "Community Hall", "Refreshments"]),
            image_url: "https://picsum.photos/seed/clinic6/800/600".into(),
            verified: true,
            latitude: Some(28.5685),
            longitude: Some(77.2405),
        },
        Clinic {
            id: "c7".into(),
            name: "Hyderabad Renal Center".into(),
            address: "Banjara Hills, Road No. 12".into(),
            city: "Hyderabad".into(),
            state: "Telangana".into(),
            clinic_type: ClinicType::MultiSpecialty,
            rating: 4.4,
            review_count: 75,
            price_per_session: 1800,
            description: "Premium multi-specialty clinic offering hemodialysis and \
                          general physician consultations."
                .into(),
            amenities: to_strings(&["Valet Parking", "Premium Lounge", "Lab Services"]),
            image_url: "https://picsum.photos/seed/clinic7/800/600".into(),
            verified: true,
            latitude: Some(17.3850),
            longitude: Some(78.4867),
        },
    ]
}

pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: "r1".into(),
            clinic_id: "c1".into(),
            user_id: "u101".into(),
            user_name: "Amit Patel".into(),
            rating: 5,
            comment: "Excellent service! The staff was very accommodating of my travel schedule."
                .into(),
            date: "2024-01-15".into(),
        },
        Review {
            id: "r2".into(),
            clinic_id: "c1".into(),
            user_id: "u102".into(),
            user_name: "Sarah Jenkins".into(),
            rating: 4,
            comment: "Clean facility, but wait time was a bit long.".into(),
            date: "2024-02-20".into(),
        },
    ]
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
