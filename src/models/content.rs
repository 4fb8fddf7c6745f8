//! Copy for the marketing pages.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub linkedin: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1523240795612-9a054b0db644?ixlib=rb-4.0.3&auto=format&fit=crop&w=1740&q=80";
pub const LOGIN_IMAGE: &str = "https://images.unsplash.com/photo-1432888498266-38ffec3eaf0a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1774&q=80";

pub fn home_features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "search",
            title: "Smart Scholarship Search",
            description: "AI-powered, personalized recommendations",
        },
        Feature {
            icon: "bookmark-check",
            title: "Verified Scholarships",
            description: "Curated, up-to-date, and authentic listings",
        },
        Feature {
            icon: "award",
            title: "Save & Track Applications",
            description: "Bookmark scholarships and track your progress",
        },
        Feature {
            icon: "check-circle",
            title: "Easy to Use",
            description: "Simple, student-friendly interface",
        },
    ]
}

pub fn home_steps() -> Vec<Step> {
    vec![
        Step {
            number: "01",
            title: "Sign Up & Complete Your Profile",
            description: "Create your account and tell us about your academic background",
        },
        Step {
            number: "02",
            title: "Search & Discover Scholarships",
            description: "Browse through AI-recommended scholarships matching your profile",
        },
        Step {
            number: "03",
            title: "Bookmark & Apply",
            description: "Save interesting scholarships and start your applications",
        },
        Step {
            number: "04",
            title: "Track Your Applications",
            description: "Monitor your application status and never miss deadlines",
        },
    ]
}

pub fn about_features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "brain",
            title: "AI-Powered Matching",
            description: "Our smart algorithm finds the perfect scholarships based on your background and qualifications.",
        },
        Feature {
            icon: "shield",
            title: "Verified Opportunities",
            description: "Every scholarship is thoroughly vetted to ensure authenticity and reliability.",
        },
        Feature {
            icon: "bookmark",
            title: "Easy Tracking",
            description: "Bookmark and track your applications in one convenient dashboard.",
        },
        Feature {
            icon: "gift",
            title: "Free to Use",
            description: "No hidden costs or premium features. Everything is free for students, forever.",
        },
    ]
}

pub fn about_steps() -> Vec<Step> {
    vec![
        Step {
            number: "01",
            title: "Sign Up & Complete Profile",
            description: "Create your account and tell us about your academic background.",
        },
        Step {
            number: "02",
            title: "Search & Discover",
            description: "Browse through AI-recommended scholarships matching your profile.",
        },
        Step {
            number: "03",
            title: "Save & Apply",
            description: "Bookmark interesting opportunities and start your applications.",
        },
        Step {
            number: "04",
            title: "Track Progress",
            description: "Monitor your applications and get updates on deadlines.",
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Sarah Johnson",
            role: "Founder & CEO",
            image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=1740&q=80",
            linkedin: "#",
        },
        TeamMember {
            name: "Michael Chen",
            role: "Chief Technology Officer",
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1740&q=80",
            linkedin: "#",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "This platform helped me find and secure a full scholarship for my undergraduate studies. The AI matching is incredibly accurate!",
            author: "Emily Rodriguez",
            role: "Computer Science Student",
            image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1740&q=80",
        },
        Testimonial {
            quote: "I was amazed by how easy it was to find scholarships that matched my unique background and interests. Highly recommended!",
            author: "James Wilson",
            role: "Medical Student",
            image: "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?ixlib=rb-4.0.3&auto=format&fit=crop&w=1740&q=80",
        },
    ]
}
