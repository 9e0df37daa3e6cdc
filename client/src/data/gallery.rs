//! Featured venues shown in the home-page gallery.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// One gallery card. Clicking it routes to `/hotel/<id>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: &'static str,
    pub image: &'static str,
}

impl GalleryItem {
    /// Translation key for the card caption.
    pub fn name_key(self) -> String {
        format!("home.gallery.places.{}", self.id)
    }

    pub fn detail_path(self) -> String {
        format!("/hotel/{}", self.id)
    }
}

macro_rules! unsplash {
    ($photo:literal) => {
        concat!("https://images.unsplash.com/photo-", $photo, "?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80")
    };
}

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem { id: "lobby", image: unsplash!("1564501049412-61c2a3083791") },
    GalleryItem { id: "restaurant", image: unsplash!("1414235077428-338989a2e8c0") },
    GalleryItem { id: "spa", image: unsplash!("1571902943202-507ec2618e8f") },
    GalleryItem { id: "pool", image: unsplash!("1571896349842-33c89424de2d") },
    GalleryItem { id: "gym", image: unsplash!("1571019613454-1cb2f99b2d8b") },
    GalleryItem { id: "rooms", image: unsplash!("1611892440504-42a792e24d32") },
    GalleryItem { id: "conference", image: unsplash!("1497366216548-37526070297c") },
    GalleryItem { id: "garden", image: unsplash!("1566073771259-6a8506099945") },
];

/// Still shown in the promo section before the video is opened.
pub const PROMO_IMAGE: &str = unsplash!("1582719478250-c89cae4dc85b");

/// Illustration beside the digital-experience feature list.
pub const DIGITAL_IMAGE: &str = unsplash!("1556742049-0cfed4f6a45d");
