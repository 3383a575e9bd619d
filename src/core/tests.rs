#[cfg(test)]
mod tests {
    use crate::core::{
        ContactFormState, FormPhase, FormVariant, LeadField, RotationMode, Rotator, TimerRequest,
        catalog, filter_products,
    };

    #[test]
    fn test_browse_filter_then_open_product() {
        let rugs = catalog().category("rugs").unwrap();
        let results = filter_products(rugs, "Type 7");
        assert_eq!(results.len(), 1);

        let chosen = results[0];
        let detail = catalog().product("rugs", &chosen.id).unwrap();
        assert_eq!(detail.title, "Handwoven Rug Type 7");
    }

    #[test]
    fn test_bedroom_rugs() {
        let rugs = catalog().category("rugs").unwrap();
        let results = filter_products(rugs, "bedroom");

        assert_eq!(results.len(), 14);
        for product in results {
            let index: usize = product.id.trim_start_matches("rug-").parse().unwrap();
            assert_eq!((index - 1) % 3, 1, "{}", product.id);
        }
    }

    #[test]
    fn test_dining_spans_rugs_only_within_category() {
        let placemats = catalog().category("placemats").unwrap();
        assert_eq!(filter_products(placemats, "dining").len(), 20);
        assert_eq!(filter_products(placemats, "individual").len(), 10);
    }

    #[test]
    fn test_rotator_over_catalog_gallery() {
        let product = catalog().product("bedding", "bedding-5").unwrap();
        let mut rotator = Rotator::new();

        let token = match rotator.load(&product.id, product.gallery_images.len()) {
            Some(TimerRequest::Repeat { token, .. }) => token,
            other => panic!("expected recurring timer, got {other:?}"),
        };

        let mut shown = vec![rotator.active_index()];
        for _ in 0..3 {
            rotator.advance(token);
            shown.push(rotator.active_index());
        }
        assert_eq!(shown, vec![0, 1, 2, 0]);
        assert_eq!(rotator.mode(), RotationMode::Auto);
    }

    #[test]
    fn test_inquiry_from_product_page() {
        let product = catalog().product("throws", "throw-2").unwrap();
        let mut form =
            ContactFormState::new(FormVariant::Modal).with_product(Some(product.title.clone()));

        form.set(LeadField::Name, "Lin".to_string());
        form.set(LeadField::Email, "lin@retail.example".to_string());
        form.set(LeadField::Message, "Do you ship to Norway?".to_string());

        let lead = form.begin_submit().unwrap();
        assert_eq!(lead.product.as_deref(), Some("Cozy Throw Blanket 2"));

        form.finish_submit(Ok(()));
        assert_eq!(form.phase(), &FormPhase::Succeeded);
    }
}
