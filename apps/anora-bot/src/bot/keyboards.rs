use crate::bot::texts;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

pub fn open_app_keyboard(url: Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        texts::OPEN_APP_BUTTON,
        WebAppInfo { url },
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn single_web_app_button() {
        let url: Url = "https://anora.example/app".parse().unwrap();
        let keyboard = open_app_keyboard(url.clone());

        assert_eq!(keyboard.inline_keyboard.len(), 1);
        assert_eq!(keyboard.inline_keyboard[0].len(), 1);

        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, texts::OPEN_APP_BUTTON);
        match &button.kind {
            InlineKeyboardButtonKind::WebApp(info) => assert_eq!(info.url, url),
            other => panic!("expected a web app button, got {:?}", other),
        }
    }
}
