//! Embedded default catalog data.
//!
//! Banner URLs are the CDN assets the storefront demo ships with. Order is
//! significant: galleries render banners exactly in this order.

use crate::types::{Banner, ClothingItem};

pub(crate) const DEALS_BANNERS: [&str; 7] = [
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/29/2eaab0d6-e843-4ad2-b1da-2159d1d30e9e1648537708005-WONDERFUL-DEALS-AHEAD-.jpg",
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/19/aa52212a-f867-4315-9b8b-355261ba0e651647679856552-Shirts---Trousers.jpg",
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/19/d506dd29-7339-48c5-8a22-a5fbfdfe16951647679856512-Top-Selling-Kurtas-----1.jpg",
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/19/126557af-2621-4b2d-82e6-692d643798301647679856536-Casual-Tees.jpg",
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/19/8492fba6-0552-4dfa-923d-e7e667fb92ee1647679856527-Heels.jpg",
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/19/a183b4a3-5f4c-46c0-98e4-6711f6495af51647679856543-Bath-Essentials.jpg",
    "https://assets.myntassets.com/f_webp,w_140,c_limit,fl_progressive,dpr_2.0/assets/images/2022/3/19/f391abc2-aae9-4d9b-bc67-caef1676b3611647679856520-Premium-Timepieces.jpg",
];

pub(crate) const BEST_SELLER_BANNERS: [&str; 15] = [
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/retaillabs/2022/3/10/b25f89eb-fbeb-4013-829e-32ee5b5daaa01646895183668-Roadster-HRX_Unisex.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/bfa5c871-a5a5-4d81-b46e-18aedccfdc9b1644407437913-Kurta_sets-_Anouk-_AAY_-_more.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/046147d1-1874-4c10-adb9-6dbd88b606e71644407437923-Kurtas-_Anouk-_Sangria_-_more.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/76acf345-fc62-4b49-8b2c-9c0fc9c925311644407437977-Tops_-_Dressberry-_AAY_-_more.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/3923c0c1-2260-4f0e-9598-15b6f9d7731c1644407437960-Roadster_and_H-N_Shirts.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/eb70855e-98c4-412d-bf20-50804546d57e1644407437883-Dresses_-_Dressberry-_Chemistry_-_more.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/eff5a33f-ea24-4e70-84e5-ec4d25ee5c7b1644407437968-Roadster_and_KnK_Tshirts.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/667a71f0-c24b-4a00-a98c-cc6a54a815e91644407437985-Tshirts_-_Roadster-_KnK_-_more.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/ffaa74a6-4824-4b19-8936-70ffaef92f001644407437937-M-H_and_HRX_Tshirts.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/f9621136-0f00-44d5-aa06-b727a6c8f7c51644407437944-M-H_and_Wrogn_Shirts.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/3f41465b-7109-4bb2-bf79-ab89ff2128be1644407437899-HRX_and_Harvard_Trackpants.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/745cec57-af58-4ba6-8ae1-a3ccbe7c54e91644407437930-Lingerie_-_Loungewear_-_DB-_ETC.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/e27ee3af-3f6b-4106-9b20-2b4463c80ba41644407437953-Roadster-_Wrogn_Jeans.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/2b15a87a-1d92-4edf-99c2-ec390a38089e1644407437872-Activewear_-_HRX-_Slazenger.jpg",
    "https://assets.myntassets.com/f_webp,w_122,c_limit,fl_progressive,dpr_2.0/assets/images/2022/2/9/931b0b8f-c14d-4ec7-b923-cf512de991731644407437891-HOP_and_Anouk_Kurtas_-_sets.jpg",
];

/// (image, description, features) rows used when no catalog.csv is present.
const DEFAULT_ITEMS: [(&str, &str, &str); 10] = [
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/11149958/2022/1/21/anouk-women-navy-blue-printed-kurta.jpg",
        "Anouk Women Navy Blue Ethnic Motifs Printed Kurta",
        "women navy blue ethnic motifs printed kurta straight calf length festive",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/13249742/2022/2/4/roadster-men-white-solid-tshirt.jpg",
        "Roadster Men White Solid Round Neck T-shirt",
        "men white solid round neck pure cotton casual tee",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/15678312/2022/2/11/dressberry-women-black-floral-dress.jpg",
        "DressBerry Women Black Floral Print Fit and Flare Dress",
        "women black floral print fit and flare knee length casual dress",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/12883266/2022/1/28/hrx-men-charcoal-grey-trackpants.jpg",
        "HRX by Hrithik Roshan Men Charcoal Rapid-Dry Trackpants",
        "men charcoal grey solid rapid dry training trackpants activewear",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/10893422/2022/1/14/sangria-women-mustard-yellow-kurta-set.jpg",
        "Sangria Women Mustard Yellow Yoke Design Kurta with Palazzos",
        "women mustard yellow yoke design embroidered kurta palazzos festive set",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/14031798/2022/2/18/wrogn-men-blue-slim-fit-jeans.jpg",
        "Wrogn Men Blue Slim Fit Light Fade Stretchable Jeans",
        "men blue slim fit light fade stretchable denim jeans casual",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/16234570/2022/3/4/mast--harbour-women-pink-sweatshirt.jpg",
        "Mast & Harbour Women Pink Solid Hooded Sweatshirt",
        "women pink solid hooded long sleeves fleece casual sweatshirt",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/11519842/2022/1/7/anouk-women-green-anarkali-kurta.jpg",
        "Anouk Women Green Floral Embroidered Anarkali Kurta",
        "women green floral embroidered anarkali flared festive wear",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/13846120/2022/2/25/roadster-men-navy-checked-shirt.jpg",
        "Roadster Men Navy Blue & White Checked Casual Shirt",
        "men navy blue white checked spread collar pure cotton casual shirt",
    ),
    (
        "https://assets.myntassets.com/f_webp,w_256,c_limit,fl_progressive,dpr_2.0/assets/images/15927834/2022/3/11/dressberry-women-beige-heels.jpg",
        "DressBerry Women Beige Solid Block Heels",
        "women beige solid mid top block heels party wear",
    ),
];

/// Embedded deals banners, in render order.
pub(crate) fn deals_banners() -> Vec<Banner> {
    DEALS_BANNERS.iter().map(|url| Banner::new(*url)).collect()
}

/// Embedded best-sellers banners, in render order.
pub(crate) fn best_seller_banners() -> Vec<Banner> {
    BEST_SELLER_BANNERS.iter().map(|url| Banner::new(*url)).collect()
}

/// Embedded clothing items, used when no catalog.csv override exists.
pub(crate) fn default_items() -> Vec<ClothingItem> {
    DEFAULT_ITEMS
        .iter()
        .map(|(image, description, features)| ClothingItem {
            image: (*image).to_string(),
            description: (*description).to_string(),
            features: (*features).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_counts() {
        assert_eq!(deals_banners().len(), 7);
        assert_eq!(best_seller_banners().len(), 15);
    }

    #[test]
    fn test_banner_order_is_definition_order() {
        let deals = deals_banners();
        assert!(deals[0].img.contains("WONDERFUL-DEALS-AHEAD"));
        assert!(deals[6].img.contains("Premium-Timepieces"));

        let best = best_seller_banners();
        assert!(best[0].img.contains("Roadster-HRX_Unisex"));
        assert!(best[14].img.contains("HOP_and_Anouk_Kurtas"));
    }

    #[test]
    fn test_default_items_nonempty_fields() {
        for item in default_items() {
            assert!(!item.image.is_empty());
            assert!(!item.description.is_empty());
            assert!(!item.features.is_empty());
        }
    }
}
