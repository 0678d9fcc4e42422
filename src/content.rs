//! Showcase copy. Every slide, quote and plan is a literal.

/// One hero slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSlide {
    pub tag: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub image: &'static str,
}

/// One client testimonial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
    pub rating: u8,
}

/// One selectable floor plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    pub id: u32,
    pub name: &'static str,
    pub area_sqft: u32,
    pub beds: u8,
    pub baths: u8,
    pub parking: u8,
    pub image: &'static str,
}

impl FloorPlan {
    /// "Studio • 1 Bath", "2 Bedrooms • 2 Baths".
    pub fn summary(&self) -> String {
        let beds = match self.beds {
            0 => "Studio".to_string(),
            1 => "1 Bedroom".to_string(),
            n => format!("{} Bedrooms", n),
        };
        let baths = if self.baths > 1 {
            format!("{} Baths", self.baths)
        } else {
            format!("{} Bath", self.baths)
        };
        format!("{} • {}", beds, baths)
    }
}

pub const BRAND: &str = "Bricksio";

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            tag: "Luxury Real Estate",
            title: "Discover refined living",
            subtitle: "in stylish contemporary residences",
            location: "Experience elevated lifestyle through elegant urban homes",
            image: "/luxury-interior-living-room.jpg",
        },
        HeroSlide {
            tag: "Residential",
            title: "The Oaks at Riverbend",
            subtitle: "Coming soon",
            location: "29 Green Lane, London",
            image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
        },
        HeroSlide {
            tag: "Luxury Villa",
            title: "Sierra Grove Villas",
            subtitle: "Coming soon",
            location: "62834 Cassin Ridges, Missoula",
            image: "https://images.unsplash.com/photo-1613490493576-7fde63acd811",
        },
        HeroSlide {
            tag: "Urban Living",
            title: "Crystal Haven Townhomes",
            subtitle: "Coming soon",
            location: "62713 The Square, Arlochester",
            image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            quote: "The entire experience was seamless from viewing to closing. The attention to detail and professionalism was exceptional.",
            author: "Victoria Sterling",
            title: "Luxury Buyer",
            rating: 5,
        },
        Testimonial {
            id: 2,
            quote: "I couldn't have asked for a better team to guide me through this investment. Their market expertise is unparalleled.",
            author: "Michael Chen",
            title: "Real Estate Investor",
            rating: 5,
        },
        Testimonial {
            id: 3,
            quote: "Finding my dream home was made possible by their dedication and knowledge. Highly recommend their services.",
            author: "Isabella Rossi",
            title: "Homeowner",
            rating: 5,
        },
    ]
}

pub fn floor_plans() -> Vec<FloorPlan> {
    vec![
        FloorPlan {
            id: 1,
            name: "Studio",
            area_sqft: 450,
            beds: 0,
            baths: 1,
            parking: 1,
            image: "/floor-plan-studio.jpg",
        },
        FloorPlan {
            id: 2,
            name: "One Bedroom",
            area_sqft: 750,
            beds: 1,
            baths: 1,
            parking: 1,
            image: "/floor-plan-1bed.jpg",
        },
        FloorPlan {
            id: 3,
            name: "Two Bedroom",
            area_sqft: 1200,
            beds: 2,
            baths: 2,
            parking: 2,
            image: "/floor-plan-2bed.jpg",
        },
        FloorPlan {
            id: 4,
            name: "Penthouse",
            area_sqft: 3500,
            beds: 4,
            baths: 4,
            parking: 3,
            image: "/floor-plan-penthouse.jpg",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_list_has_slides() {
        assert_eq!(hero_slides().len(), 4);
        assert_eq!(testimonials().len(), 3);
        assert_eq!(floor_plans().len(), 4);
    }

    #[test]
    fn plan_summary_wording() {
        let plans = floor_plans();
        assert_eq!(plans[0].summary(), "Studio • 1 Bath");
        assert_eq!(plans[1].summary(), "1 Bedroom • 1 Bath");
        assert_eq!(plans[3].summary(), "4 Bedrooms • 4 Baths");
    }
}
