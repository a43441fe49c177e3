//! Static storefront-product-id to Printful-variant-id catalog.
//!
//! The mapping is a compile-time constant: the storefront sells a fixed set
//! of products and the webhook must never mutate it at runtime. Unknown ids
//! resolve to [`DEFAULT_VARIANT_ID`] so an unmapped product still produces
//! an order instead of dropping the item or failing the checkout.

/// Fallback variant for product ids not in the catalog (Bella+Canvas 3001 -
/// White).
pub const DEFAULT_VARIANT_ID: u32 = 4011;

/// The single design file attached to every ordered item.
pub const DESIGN_FILE_URL: &str = "https://files.catbox.moe/1p8f9p.png";

/// Resolve a storefront product id to a Printful variant id.
///
/// Unknown ids fall back to [`DEFAULT_VARIANT_ID`] rather than erroring.
#[must_use]
pub fn variant_id(product_id: &str) -> u32 {
    match product_id {
        "classic-tshirt-bella-3001" => 4011, // Bella+Canvas 3001 - White
        "premium-tshirt-triblend" => 212,    // Gildan 64000 - Black
        "classic-hoodie-18500" => 17338,     // Gildan 18500 - Black
        "premium-hoodie-zip" => 1483,        // Gildan 18500 Zip - Black
        "ceramic-mug-11oz" => 1003,          // 11oz Mug - White
        "premium-poster-12x18" => 1,         // Placeholder until the poster variant is finalized
        _ => DEFAULT_VARIANT_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_products_map_to_their_variants() {
        assert_eq!(variant_id("classic-tshirt-bella-3001"), 4011);
        assert_eq!(variant_id("premium-tshirt-triblend"), 212);
        assert_eq!(variant_id("classic-hoodie-18500"), 17338);
        assert_eq!(variant_id("premium-hoodie-zip"), 1483);
        assert_eq!(variant_id("ceramic-mug-11oz"), 1003);
        assert_eq!(variant_id("premium-poster-12x18"), 1);
    }

    #[test]
    fn unknown_product_falls_back_to_default_variant() {
        // Deliberate policy: an unmapped product id ships the default
        // variant instead of rejecting the order. A wrong catalog entry
        // therefore ships the wrong product silently.
        assert_eq!(variant_id("limited-edition-cap"), DEFAULT_VARIANT_ID);
        assert_eq!(variant_id(""), DEFAULT_VARIANT_ID);
    }
}
