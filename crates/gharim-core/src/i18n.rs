//! # Bilingual Message Table
//!
//! Every shopper- or operator-visible string the core produces is looked up
//! here by `(MessageKey, Language)`. The order encoder and the checkout
//! validator never branch on the language themselves.
//!
//! Templates may contain a `{store}` placeholder, filled with the configured
//! store name by [`text_with_store`].

use crate::types::Language;

/// Keys of the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Order message
    OrderHeader,
    CustomerInfoHeading,
    LabelName,
    LabelPhone,
    LabelGovernorate,
    LabelAddress,
    LabelEmail,
    LabelNotes,
    ProductsHeading,
    LabelQuantity,
    LabelPrice,
    LabelSubtotal,
    LabelTotal,
    OrderThanks,

    // Checkout validation
    NameRequired,
    PhoneRequired,
    PhoneInvalid,
    GovernorateRequired,
    GovernorateInvalid,
    AddressRequired,
    EmailInvalid,

    // Checkout flow
    CartEmpty,
    OrderSent,
    OrderSentDetail,
    OrderSubmitError,

    // Catalog
    ProductNotFound,
    AllProducts,
    SectionCoffee,
    SectionSweets,
    SectionGifts,
    SectionTraditional,
    SectionBooks,

    // Admin
    ImageRequired,
    ProductUploaded,
    ErrorPrefix,
}

impl MessageKey {
    /// Every key, for exhaustive table checks.
    pub const ALL: [MessageKey; 35] = [
        MessageKey::OrderHeader,
        MessageKey::CustomerInfoHeading,
        MessageKey::LabelName,
        MessageKey::LabelPhone,
        MessageKey::LabelGovernorate,
        MessageKey::LabelAddress,
        MessageKey::LabelEmail,
        MessageKey::LabelNotes,
        MessageKey::ProductsHeading,
        MessageKey::LabelQuantity,
        MessageKey::LabelPrice,
        MessageKey::LabelSubtotal,
        MessageKey::LabelTotal,
        MessageKey::OrderThanks,
        MessageKey::NameRequired,
        MessageKey::PhoneRequired,
        MessageKey::PhoneInvalid,
        MessageKey::GovernorateRequired,
        MessageKey::GovernorateInvalid,
        MessageKey::AddressRequired,
        MessageKey::EmailInvalid,
        MessageKey::CartEmpty,
        MessageKey::OrderSent,
        MessageKey::OrderSentDetail,
        MessageKey::OrderSubmitError,
        MessageKey::ProductNotFound,
        MessageKey::AllProducts,
        MessageKey::SectionCoffee,
        MessageKey::SectionSweets,
        MessageKey::SectionGifts,
        MessageKey::SectionTraditional,
        MessageKey::SectionBooks,
        MessageKey::ImageRequired,
        MessageKey::ProductUploaded,
        MessageKey::ErrorPrefix,
    ];
}

/// Looks up the message for `key` in `lang`.
pub fn text(key: MessageKey, lang: Language) -> &'static str {
    use Language::{Ar, En};
    use MessageKey::*;

    match (key, lang) {
        (OrderHeader, En) => "New Order from {store}",
        (OrderHeader, Ar) => "طلب جديد من {store}",
        (CustomerInfoHeading, En) => "Customer Information:",
        (CustomerInfoHeading, Ar) => "معلومات العميل:",
        (LabelName, En) => "Name",
        (LabelName, Ar) => "الاسم",
        (LabelPhone, En) => "Phone",
        (LabelPhone, Ar) => "الهاتف",
        (LabelGovernorate, En) => "Governorate",
        (LabelGovernorate, Ar) => "المحافظة",
        (LabelAddress, En) => "Address",
        (LabelAddress, Ar) => "العنوان",
        (LabelEmail, En) => "Email",
        (LabelEmail, Ar) => "البريد الإلكتروني",
        (LabelNotes, En) => "Notes",
        (LabelNotes, Ar) => "ملاحظات",
        (ProductsHeading, En) => "Products:",
        (ProductsHeading, Ar) => "المنتجات:",
        (LabelQuantity, En) => "Quantity",
        (LabelQuantity, Ar) => "الكمية",
        (LabelPrice, En) => "Price",
        (LabelPrice, Ar) => "السعر",
        (LabelSubtotal, En) => "Subtotal",
        (LabelSubtotal, Ar) => "المجموع",
        (LabelTotal, En) => "Total",
        (LabelTotal, Ar) => "المجموع الكلي",
        (OrderThanks, En) => "Thank you for your order from {store}! 🙏",
        (OrderThanks, Ar) => "شكراً لطلبك من {store}! 🙏",

        (NameRequired, En) => "Name is required",
        (NameRequired, Ar) => "الاسم مطلوب",
        (PhoneRequired, En) => "Phone is required",
        (PhoneRequired, Ar) => "رقم الهاتف مطلوب",
        (PhoneInvalid, En) => "Invalid Iraqi phone number",
        (PhoneInvalid, Ar) => "رقم هاتف عراقي غير صحيح",
        (GovernorateRequired, En) => "Governorate is required",
        (GovernorateRequired, Ar) => "المحافظة مطلوبة",
        (GovernorateInvalid, En) => "Unknown governorate",
        (GovernorateInvalid, Ar) => "محافظة غير معروفة",
        (AddressRequired, En) => "Address is required",
        (AddressRequired, Ar) => "العنوان مطلوب",
        (EmailInvalid, En) => "Invalid email address",
        (EmailInvalid, Ar) => "بريد إلكتروني غير صحيح",

        (CartEmpty, En) => "Your cart is empty",
        (CartEmpty, Ar) => "العلاگه فارغة",
        (OrderSent, En) => "Order Sent Successfully!",
        (OrderSent, Ar) => "تم إرسال الطلب بنجاح!",
        (OrderSentDetail, En) => {
            "Thank you for your order! We have received your request via WhatsApp \
             and will contact you shortly to confirm your order details."
        }
        (OrderSentDetail, Ar) => {
            "شكراً لطلبك! لقد استلمنا طلبك عبر واتساب وسنتواصل معك قريباً لتأكيد تفاصيل طلبك."
        }
        (OrderSubmitError, En) => "Error submitting order",
        (OrderSubmitError, Ar) => "خطأ في إرسال الطلب",

        (ProductNotFound, En) => "Product not found",
        (ProductNotFound, Ar) => "المنتج غير موجود",
        (AllProducts, En) => "All Products",
        (AllProducts, Ar) => "جميع المنتجات",
        (SectionCoffee, En) => "Coffee",
        (SectionCoffee, Ar) => "قهوة",
        (SectionSweets, En) => "Sweets",
        (SectionSweets, Ar) => "حلويات",
        (SectionGifts, En) => "Gifts",
        (SectionGifts, Ar) => "هدايا",
        (SectionTraditional, En) => "Traditional Items",
        (SectionTraditional, Ar) => "منتجات تقليدية",
        (SectionBooks, En) => "Islamic Books",
        (SectionBooks, Ar) => "كتب إسلامية",

        (ImageRequired, En) => "Please select an image",
        (ImageRequired, Ar) => "يرجى اختيار صورة",
        (ProductUploaded, En) => "✅ Product uploaded successfully!",
        (ProductUploaded, Ar) => "✅ تم رفع المنتج بنجاح!",
        (ErrorPrefix, En) => "Error",
        (ErrorPrefix, Ar) => "خطأ",
    }
}

/// Looks up a template and fills its `{store}` placeholder.
pub fn text_with_store(key: MessageKey, lang: Language, store_name: &str) -> String {
    text(key, lang).replace("{store}", store_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_languages() {
        for key in MessageKey::ALL {
            for lang in Language::ALL {
                assert!(!text(key, lang).trim().is_empty(), "{:?}/{:?}", key, lang);
            }
            assert_ne!(text(key, Language::En), text(key, Language::Ar), "{:?}", key);
        }
    }

    #[test]
    fn test_store_placeholder() {
        assert_eq!(
            text_with_store(MessageKey::OrderHeader, Language::En, "Gharim Store"),
            "New Order from Gharim Store"
        );
        assert_eq!(
            text_with_store(MessageKey::OrderThanks, Language::Ar, "غريم ستور"),
            "شكراً لطلبك من غريم ستور! 🙏"
        );
    }
}
