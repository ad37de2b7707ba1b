//! Attach affiliate links to itinerary call-to-actions.
//!
//! The engine only names a provider for each booking slot. Building the
//! tracked URL belongs to an [`AffiliateLinkBuilder`] supplied by the caller.

use crate::{AffiliateProvider, CtaCategory, ItineraryPlan};

/// Everything a link builder needs to know about one call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRequest<'a> {
    /// Kind of booking.
    pub category: CtaCategory,
    /// Partner that fulfils the booking.
    pub provider: AffiliateProvider,
    /// Display name of the destination.
    pub destination: &'a str,
    /// Button label, used as the item name for retail searches.
    pub item: Option<&'a str>,
}

/// Build affiliate URLs for call-to-actions.
///
/// Returning `None` leaves the slot without a link.
///
/// # Examples
///
/// ```rust
/// use tripsaver_core::{AffiliateLinkBuilder, LinkRequest};
///
/// struct SearchLinks;
///
/// impl AffiliateLinkBuilder for SearchLinks {
///     fn build(&self, request: LinkRequest<'_>) -> Option<String> {
///         Some(format!("https://{}.example/{}", request.provider, request.destination))
///     }
/// }
/// ```
pub trait AffiliateLinkBuilder: Send + Sync {
    /// Return the URL for `request`, if the builder supports it.
    fn build(&self, request: LinkRequest<'_>) -> Option<String>;
}

impl ItineraryPlan {
    /// Return a copy of the plan with every call-to-action link resolved.
    #[must_use]
    pub fn with_links(&self, builder: &dyn AffiliateLinkBuilder) -> Self {
        let mut linked = self.clone();
        for day in &mut linked.itinerary {
            for cta in &mut day.ctas {
                cta.link = builder.build(LinkRequest {
                    category: cta.category,
                    provider: cta.provider,
                    destination: &self.destination,
                    item: Some(cta.label.as_str()),
                });
            }
        }
        linked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItineraryCta, ItineraryDay};
    use rstest::{fixture, rstest};

    struct HotelsOnly;

    impl AffiliateLinkBuilder for HotelsOnly {
        fn build(&self, request: LinkRequest<'_>) -> Option<String> {
            (request.category == CtaCategory::Hotel).then(|| {
                format!(
                    "https://{}.example/{}?q={}",
                    request.provider,
                    request.destination,
                    request.item.unwrap_or_default()
                )
            })
        }
    }

    fn cta(category: CtaCategory, provider: AffiliateProvider, label: &str) -> ItineraryCta {
        ItineraryCta {
            category,
            label: label.into(),
            provider,
            emoji: None,
            link: None,
        }
    }

    #[fixture]
    fn plan() -> ItineraryPlan {
        ItineraryPlan {
            destination: "Goa".into(),
            emoji: None,
            days: 1,
            title: "Goa day trip".into(),
            description: "Beaches".into(),
            best_time: String::new(),
            budget: String::new(),
            itinerary: vec![ItineraryDay {
                day: 1,
                title: "Baga".into(),
                description: "Beach day".into(),
                emoji: None,
                places: vec!["Baga Beach".into()],
                activities: vec!["Water sports".into()],
                ctas: vec![
                    cta(CtaCategory::Hotel, AffiliateProvider::Agoda, "Hotels"),
                    cta(CtaCategory::Essential, AffiliateProvider::Amazon, "Sunscreen"),
                ],
            }],
        }
    }

    #[rstest]
    fn links_are_attached_per_cta(plan: ItineraryPlan) {
        let linked = plan.with_links(&HotelsOnly);
        let links: Vec<Option<&str>> = linked.ctas().map(|cta| cta.link.as_deref()).collect();
        assert_eq!(links, [Some("https://agoda.example/Goa?q=Hotels"), None]);
    }

    #[rstest]
    fn original_plan_is_untouched(plan: ItineraryPlan) {
        let _linked = plan.with_links(&HotelsOnly);
        assert!(plan.ctas().all(|cta| cta.link.is_none()));
    }
}
