//! Bilingual UI strings that live outside the fetched content fragments.

use super::language::Language;

pub fn load_error(language: Language) -> &'static str {
    match language {
        Language::Arabic => {
            "حدث خطأ أثناء تحميل المحتوى. يرجى التحقق من الاتصال والمحاولة مرة أخرى."
        }
        Language::English => "Error loading content. Please check your connection and try again.",
    }
}

pub fn error_heading(language: Language) -> &'static str {
    match language {
        Language::Arabic => "خطأ",
        Language::English => "Error",
    }
}

pub fn retry_label(language: Language) -> &'static str {
    match language {
        Language::Arabic => "إعادة المحاولة",
        Language::English => "Retry",
    }
}

pub fn loading_label(language: Language) -> &'static str {
    match language {
        Language::Arabic => "جارٍ التحميل...",
        Language::English => "Loading...",
    }
}

/// Labels of the feedback form, in field order.
pub struct FeedbackLabels {
    pub heading: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
}

pub fn feedback_labels(language: Language) -> FeedbackLabels {
    match language {
        Language::Arabic => FeedbackLabels {
            heading: "شاركينا رأيك",
            name: "الاسم (اختياري)",
            email: "البريد الإلكتروني (اختياري)",
            message: "رسالتك",
            submit: "إرسال",
        },
        Language::English => FeedbackLabels {
            heading: "Share your feedback",
            name: "Name (optional)",
            email: "Email (optional)",
            message: "Your message",
            submit: "Send",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_string_is_translated() {
        for lang in Language::all() {
            let other = lang.other();
            assert_ne!(load_error(lang), load_error(other));
            assert_ne!(error_heading(lang), error_heading(other));
            assert_ne!(retry_label(lang), retry_label(other));
            assert_ne!(loading_label(lang), loading_label(other));
            assert_ne!(feedback_labels(lang).submit, feedback_labels(other).submit);
        }
    }
}
