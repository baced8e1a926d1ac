//! Minimal trees used when a language's module cannot be fetched from anywhere:
//! enough to relabel the navigation, the hero call-to-actions and the overlay.

use crate::i18n::Language;

use super::ContentTree;

const HINDI: &[(&str, &str)] = &[
    ("nav-logo-text", "बहुजन समाज पार्टी"),
    ("nav-home", "मुख्य पृष्ठ"),
    ("nav-about", "हमारे बारे में"),
    ("nav-vision", "दृष्टिकोण"),
    ("nav-timeline", "समयरेखा"),
    ("nav-events", "कार्यक्रम"),
    ("nav-updates", "अपडेट्स"),
    ("nav-gallery", "गैलरी"),
    ("nav-resources", "संसाधन"),
    ("nav-contact", "संपर्क"),
    ("nav-faq", "सामान्य प्रश्न"),
    ("hero-title", "बहुजन समाज पार्टी"),
    ("hero-subtitle", "सामाजिक परिवर्तन और आर्थिक मुक्ति"),
    (
        "hero-description",
        "डॉ. बी.आर. अम्बेडकर की विचारधारा के माध्यम से अनुसूचित जाति, अनुसूचित जनजाति और अन्य पिछड़े वर्गों का सशक्तिकरण",
    ),
    ("hero-learn-more", "और जानें"),
    ("hero-join-us", "हमसे जुड़ें"),
    ("loading-text", "लोड हो रहा है..."),
];

const TAMIL: &[(&str, &str)] = &[
    ("nav-logo-text", "பகுஜன் சமாஜ் கட்சி"),
    ("nav-home", "முகப்பு"),
    ("nav-about", "எங்களைப் பற்றி"),
    ("nav-vision", "தொலைநோக்கு"),
    ("nav-timeline", "நேரக்கோடு"),
    ("nav-events", "நிகழ்வுகள்"),
    ("nav-updates", "புதுப்பிப்புகள்"),
    ("nav-gallery", "கேலரி"),
    ("nav-resources", "வளங்கள்"),
    ("nav-contact", "தொடர்பு"),
    ("nav-faq", "கேள்விகள்"),
    ("hero-title", "பகுஜன் சமாஜ் கட்சி"),
    ("hero-subtitle", "சமூக மாற்றம் & பொருளாதார விடுதலை"),
    (
        "hero-description",
        "டாக்டர் பி.ஆர். அம்பேத்கரின் கொள்கையின் மூலம் பட்டியல் சாதி, பட்டியல் பழங்குடியினர் மற்றும் பிற பிற்படுத்தப்பட்ட வகுப்பினரின் அதிகாரமளித்தல்",
    ),
    ("hero-learn-more", "மேலும் அறிக"),
    ("hero-join-us", "எங்களுடன் சேருங்கள்"),
    ("loading-text", "ஏற்றுகிறது..."),
];

const ENGLISH: &[(&str, &str)] = &[
    ("nav-logo-text", "BAHUJAN SAMAJ PARTY"),
    ("nav-home", "Home"),
    ("nav-about", "About"),
    ("nav-vision", "Vision"),
    ("nav-timeline", "Timeline"),
    ("nav-events", "Events"),
    ("nav-updates", "Updates"),
    ("nav-gallery", "Gallery"),
    ("nav-resources", "Resources"),
    ("nav-contact", "Contact"),
    ("nav-faq", "FAQ"),
    ("hero-title", "Bahujan Samaj Party"),
    ("hero-subtitle", "Social Transformation & Economic Emancipation"),
    ("hero-learn-more", "Learn More"),
    ("hero-join-us", "Join Us"),
    ("loading-text", "Loading..."),
];

/// Hard-coded degraded tree for `language`.
pub fn stub_tree(language: Language) -> ContentTree {
    let pairs = match language {
        Language::English => ENGLISH,
        Language::Hindi => HINDI,
        Language::Tamil => TAMIL,
    };
    ContentTree::from_pairs(language, pairs.iter().copied())
}
