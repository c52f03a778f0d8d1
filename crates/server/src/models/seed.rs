use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::models::resource::Resource;

/// Default entries the page offers to insert while they are absent.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SeedResource {
    #[strum(to_string = "cloudflare-docs")]
    CloudflareDocs,
    #[strum(to_string = "vite-docs")]
    ViteDocs,
}

impl SeedResource {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CloudflareDocs => "Cloudflare Pages Docs - Remix guide",
            Self::ViteDocs => "Remix Cloudflare Docs",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Self::CloudflareDocs => {
                "https://developers.cloudflare.com/pages/framework-guides/deploy-a-remix-site/"
            }
            Self::ViteDocs => "https://remix.run/docs/en/main/future/vite#cloudflare",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Self::CloudflareDocs => "Add Cloudflare Docs",
            Self::ViteDocs => "Add Vite Docs",
        }
    }

    pub fn is_present_in(&self, resources: &[Resource]) -> bool {
        contains_href(resources, self.href())
    }
}

/// Exact byte comparison, no normalization of slashes, case or query strings.
pub fn contains_href(resources: &[Resource], href: &str) -> bool {
    resources.iter().any(|resource| resource.href == href)
}

pub fn missing_seeds(resources: &[Resource]) -> Vec<SeedResource> {
    SeedResource::iter()
        .filter(|seed| !seed.is_present_in(resources))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: i64, href: &str) -> Resource {
        Resource {
            id,
            title: format!("resource {id}"),
            href: href.to_string(),
        }
    }

    #[test]
    fn all_seeds_missing_from_empty_list() {
        assert_eq!(
            missing_seeds(&[]),
            vec![SeedResource::CloudflareDocs, SeedResource::ViteDocs]
        );
    }

    #[test]
    fn present_seed_is_not_offered() {
        let resources = vec![
            resource(1, "https://example.com"),
            resource(
                2,
                "https://developers.cloudflare.com/pages/framework-guides/deploy-a-remix-site/",
            ),
        ];
        assert!(SeedResource::CloudflareDocs.is_present_in(&resources));
        assert_eq!(missing_seeds(&resources), vec![SeedResource::ViteDocs]);
    }

    #[test]
    fn both_seeds_present() {
        let resources = vec![
            resource(1, SeedResource::ViteDocs.href()),
            resource(2, SeedResource::CloudflareDocs.href()),
        ];
        assert!(missing_seeds(&resources).is_empty());
    }

    #[test]
    fn trailing_slash_does_not_match() {
        let resources = vec![resource(1, "https://example.com/")];
        assert!(!contains_href(&resources, "https://example.com"));
        assert!(contains_href(&resources, "https://example.com/"));
    }

    #[test]
    fn seed_without_trailing_slash_is_still_missing() {
        let resources = vec![resource(
            1,
            "https://developers.cloudflare.com/pages/framework-guides/deploy-a-remix-site",
        )];
        assert!(!SeedResource::CloudflareDocs.is_present_in(&resources));
    }

    #[test]
    fn case_and_query_differences_do_not_match() {
        let resources = vec![
            resource(1, "https://REMIX.run/docs/en/main/future/vite#cloudflare"),
            resource(2, "https://remix.run/docs/en/main/future/vite?x=1#cloudflare"),
        ];
        assert!(!SeedResource::ViteDocs.is_present_in(&resources));
    }
}
