//! Direct Instagram links for search entries

use super::response::{HashtagInfo, PlaceInfo, UserInfo};

/// Origin of every produced link
pub const INSTAGRAM_URL: &str = "https://www.instagram.com";

/// Profile page of a user
pub fn user_url(user: &UserInfo) -> String {
    format!("{}/{}/", INSTAGRAM_URL, user.username)
}

/// Location page of a place
pub fn place_url(place: &PlaceInfo) -> String {
    format!(
        "{}/explore/locations/{}/{}/",
        INSTAGRAM_URL, place.location.pk, place.slug
    )
}

/// Tag page of a hashtag
pub fn hashtag_url(hashtag: &HashtagInfo) -> String {
    format!("{}/explore/tags/{}/", INSTAGRAM_URL, hashtag.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::response::{Location, LocationPk};

    #[test]
    fn test_user_url() {
        let user = UserInfo {
            username: "natgeo".into(),
        };
        assert_eq!(user_url(&user), "https://www.instagram.com/natgeo/");
        assert_eq!(user_url(&user), user_url(&user.clone()));
    }

    #[test]
    fn test_place_url() {
        let place = PlaceInfo {
            location: Location {
                pk: LocationPk::Number(213385402),
            },
            slug: "london-united-kingdom".into(),
        };
        assert_eq!(
            place_url(&place),
            "https://www.instagram.com/explore/locations/213385402/london-united-kingdom/"
        );
    }

    #[test]
    fn test_hashtag_url() {
        let tag = HashtagInfo {
            name: "sunset".into(),
        };
        assert_eq!(hashtag_url(&tag), "https://www.instagram.com/explore/tags/sunset/");
    }
}
