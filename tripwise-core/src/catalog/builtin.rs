//! The catalog shipped with the engine.
//!
//! Eight destinations, weight tables for Kyoto and Barcelona over the ten
//! default preferences, and four activity templates for each of those two.

use std::collections::BTreeMap;

use super::Catalog;
use crate::{ActivityTemplate, Destination, PreferenceWeights};

const KYOTO: &str = "1";
const BARCELONA: &str = "2";

impl Catalog {
    /// The built-in catalog.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.len(), 8);
    /// assert_eq!(catalog.display_name("1"), "Kyoto");
    /// assert_eq!(catalog.activities("1").len(), 4);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            destinations: destinations(),
            weights: BTreeMap::from([
                (KYOTO.to_owned(), kyoto_weights()),
                (BARCELONA.to_owned(), barcelona_weights()),
            ]),
            activities: BTreeMap::from([
                (KYOTO.to_owned(), kyoto_activities()),
                (BARCELONA.to_owned(), barcelona_activities()),
            ]),
        }
    }
}

fn destinations() -> Vec<Destination> {
    vec![
        Destination::new(KYOTO, "Kyoto", "Japan")
            .with_description(
                "Ancient temples, traditional geisha districts, and serene bamboo forests make Kyoto a cultural treasure.",
            )
            .with_image("https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?q=80&w=1000&auto=format&fit=crop")
            .with_duration("5-7 days")
            .with_rating(4.8)
            .with_tags(["Culture", "History", "Temples"]),
        Destination::new(BARCELONA, "Barcelona", "Spain")
            .with_description(
                "A vibrant city known for stunning architecture, beautiful beaches, and a world-class dining scene.",
            )
            .with_image("https://images.unsplash.com/photo-1539037116277-4db20889f2d4?q=80&w=1000&auto=format&fit=crop")
            .with_duration("4-6 days")
            .with_rating(4.7)
            .with_tags(["Architecture", "Beach", "Food"]),
        Destination::new("3", "Santorini", "Greece")
            .with_description(
                "Famous for its dramatic views, stunning sunsets, white-washed houses, and blue-domed churches.",
            )
            .with_image("https://images.unsplash.com/photo-1571406384450-b2fork0b2d1f?q=80&w=1000&auto=format&fit=crop")
            .with_duration("3-5 days")
            .with_rating(4.9)
            .with_tags(["Scenic", "Beach", "Romantic"]),
        Destination::new("4", "New York City", "USA")
            .with_description(
                "The ultimate urban adventure with iconic skyscrapers, world-class museums, and diverse neighborhoods.",
            )
            .with_image("https://images.unsplash.com/photo-1496588152823-86ff7695a68j?q=80&w=1000&auto=format&fit=crop")
            .with_duration("5-8 days")
            .with_rating(4.6)
            .with_tags(["Urban", "Culture", "Shopping"]),
        Destination::new("5", "Bali", "Indonesia")
            .with_description(
                "A paradise island offering incredible beaches, lush rice terraces, and spiritual experiences.",
            )
            .with_image("https://images.unsplash.com/photo-1537996194471-e657df975ab4?q=80&w=1000&auto=format&fit=crop")
            .with_duration("7-10 days")
            .with_rating(4.5)
            .with_tags(["Beach", "Adventure", "Nature"]),
        Destination::new("6", "Rome", "Italy")
            .with_description(
                "The Eternal City combines ancient ruins, awe-inspiring art, and vibrant street life with modern culture.",
            )
            .with_image("https://images.unsplash.com/photo-1552832230-c0197dd311b5?q=80&w=1000&auto=format&fit=crop")
            .with_duration("4-6 days")
            .with_rating(4.7)
            .with_tags(["History", "Food", "Art"]),
        Destination::new("7", "Marrakech", "Morocco")
            .with_description(
                "A magical place filled with markets, gardens, palaces, and mosques in vibrant North Africa.",
            )
            .with_image("https://images.unsplash.com/photo-1535530992830-e25d07cfa780?q=80&w=1000&auto=format&fit=crop")
            .with_duration("3-5 days")
            .with_rating(4.4)
            .with_tags(["Culture", "Shopping", "Architecture"]),
        Destination::new("8", "Swiss Alps", "Switzerland")
            .with_description(
                "Spectacular mountain scenery with world-class skiing, hiking, and charming alpine villages.",
            )
            .with_image("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?q=80&w=1000&auto=format&fit=crop")
            .with_duration("5-7 days")
            .with_rating(4.8)
            .with_tags(["Nature", "Adventure", "Scenic"]),
    ]
}

// Preference ids follow `default_preferences`: 1 art & culture, 2 food,
// 3 nature, 4 architecture, 5 adventure, 6 beach, 7 nightlife, 8 local
// experience, 9 shopping, 10 wine & drinks.
fn kyoto_weights() -> PreferenceWeights {
    [
        ("1", 0.9),
        ("2", 0.7),
        ("3", 0.5),
        ("4", 0.8),
        ("5", 0.3),
        ("6", 0.2),
        ("7", 0.4),
        ("8", 0.8),
        ("9", 0.6),
        ("10", 0.5),
    ]
    .into_iter()
    .collect()
}

fn barcelona_weights() -> PreferenceWeights {
    [
        ("1", 0.7),
        ("2", 0.9),
        ("3", 0.4),
        ("4", 0.9),
        ("5", 0.5),
        ("6", 0.8),
        ("7", 0.8),
        ("8", 0.7),
        ("9", 0.8),
        ("10", 0.7),
    ]
    .into_iter()
    .collect()
}

fn kyoto_activities() -> Vec<ActivityTemplate> {
    vec![
        ActivityTemplate::new(
            "09:00",
            "Fushimi Inari Shrine",
            "Walk through thousands of vermilion torii gates leading into the wooded forest of the sacred Mount Inari.",
            "Fushimi Ward, Kyoto",
            "2h",
        ),
        ActivityTemplate::new(
            "12:00",
            "Lunch at Nishiki Market",
            "Sample local street food and delicacies at Kyoto's famous food market.",
            "Central Kyoto",
            "1h 30m",
        ),
        ActivityTemplate::new(
            "14:30",
            "Arashiyama Bamboo Grove",
            "Experience the surreal landscape of towering bamboo stalks swaying in the wind.",
            "Arashiyama District",
            "1h",
        ),
        ActivityTemplate::new(
            "16:30",
            "Tea Ceremony",
            "Participate in a traditional Japanese tea ceremony with a local master.",
            "Gion District",
            "1h 30m",
        ),
    ]
}

fn barcelona_activities() -> Vec<ActivityTemplate> {
    vec![
        ActivityTemplate::new(
            "09:30",
            "Sagrada Familia",
            "Marvel at Gaudí's masterpiece, the unfinished Sagrada Familia basilica.",
            "Eixample District",
            "2h",
        ),
        ActivityTemplate::new(
            "12:00",
            "Lunch at La Boqueria Market",
            "Enjoy fresh tapas and local specialties at this famous market.",
            "Las Ramblas",
            "1h 30m",
        ),
        ActivityTemplate::new(
            "14:30",
            "Park Güell",
            "Explore this colorful park with amazing views, designed by Antoni Gaudí.",
            "Carmel Hill",
            "2h",
        ),
        ActivityTemplate::new(
            "17:30",
            "Beach Time at Barceloneta",
            "Relax at Barcelona's most popular urban beach.",
            "Barceloneta",
            "2h",
        ),
    ]
}
