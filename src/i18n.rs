//! User-facing strings in English, Hindi and Tamil.
//!
//! Lookup falls back to English for untranslated keys, then to the key
//! itself, so a missing entry degrades visibly instead of crashing.

use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, clap::ValueEnum)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Lang {
    #[default]
    En,
    Hi,
    Ta,
}

pub fn tr<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .unwrap_or(key)
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    match lang {
        Lang::En => en(key),
        Lang::Hi => hi(key),
        Lang::Ta => ta(key),
    }
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "section_patterns_title" => "Patterns",
        "section_recent_thoughts" => "Recent Thoughts",
        "subtitle_root_cause" => "Root Cause",
        "subtitle_nature" => "Nature",
        "label_content" => "What's on your mind?",
        "label_created" => "Created",
        "label_recurrence" => "Recurrence",
        "empty_history" => "No thoughts yet.",
        "empty_search_results" => "No thoughts found.",
        "empty_log_to_see" => "Log thoughts to see analytics",
        "msg_saved" => "Saved!",
        "msg_updated" => "Updated!",
        "msg_import_success" => "Data imported successfully!",
        "msg_all_deleted" => "All data deleted.",
        "err_invalid_format" => "Invalid data format. Must be an array of thoughts.",
        "btn_sure" => "Sure?",
        "placeholder_delete" => "Type 'delete' to confirm",
        _ => return None,
    })
}

fn hi(key: &str) -> Option<&'static str> {
    Some(match key {
        "section_patterns_title" => "पैटर्न",
        "section_recent_thoughts" => "हाल के विचार",
        "subtitle_root_cause" => "मूल कारण",
        "subtitle_nature" => "प्रकृति",
        "label_content" => "आपके मन में क्या है?",
        "empty_history" => "अभी तक कोई विचार नहीं।",
        "empty_search_results" => "कोई विचार नहीं मिला।",
        "empty_log_to_see" => "विश्लेषण देखने के लिए विचार दर्ज करें",
        "msg_saved" => "सहेजा गया!",
        "msg_updated" => "अपडेट किया गया!",
        "msg_import_success" => "डेटा सफलतापूर्वक आयात किया गया!",
        "msg_all_deleted" => "सभी डेटा हटा दिया गया।",
        "err_invalid_format" => "अमान्य डेटा प्रारूप। विचारों की एक सूची होनी चाहिए।",
        "btn_sure" => "पक्का?",
        "placeholder_delete" => "पुष्टि करने के लिए 'delete' टाइप करें",
        _ => return None,
    })
}

fn ta(key: &str) -> Option<&'static str> {
    Some(match key {
        "section_patterns_title" => "வடிவங்கள்",
        "section_recent_thoughts" => "சமீபத்திய எண்ணங்கள்",
        "subtitle_root_cause" => "மூல காரணம்",
        "subtitle_nature" => "தன்மை",
        "label_content" => "உங்கள் மனதில் என்ன இருக்கிறது?",
        "empty_history" => "இதுவரை எண்ணங்கள் இல்லை.",
        "empty_search_results" => "எண்ணங்கள் எதுவும் இல்லை.",
        "empty_log_to_see" => "பகுப்பாய்வைக் காண எண்ணங்களை பதிவு செய்யவும்",
        "msg_saved" => "சேமிக்கப்பட்டது!",
        "msg_updated" => "புதுப்பிக்கப்பட்டது!",
        "msg_import_success" => "வெற்றிகரமாக இறக்குமதி செய்யப்பட்டது!",
        "msg_all_deleted" => "எல்லா தரவும் நீக்கப்பட்டது.",
        "err_invalid_format" => "தவறான வடிவம்.",
        "btn_sure" => "நிச்சயமா?",
        "placeholder_delete" => "உறுதிப்படுத்த 'delete' என தட்டச்சு செய்க",
        _ => return None,
    })
}
