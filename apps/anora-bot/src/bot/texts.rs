pub const WELCOME: &str = "🎨 Welcome to Anora Art!\n\n\
    Create unique artwork with AI.\n\
    Tap the button below to get started:";
pub const OPEN_APP_BUTTON: &str = "🎨 Open Anora Art";

pub const DECODE_ERROR: &str = "❌ Error processing data";
pub const GENERIC_ERROR: &str = "❌ Something went wrong";
pub const PAYMENT_CREATION_ERROR: &str = "❌ Error creating payment";
pub const INVALID_PAYMENT: &str = "❌ Invalid payment";

pub const HAS_ACCESS: &str = "✅ You have premium access";
pub const NO_ACCESS: &str = "❌ Premium access is not active";

pub const PAYMENT_CONFIRMED: &str = "🎉 Thank you for your payment!\n\n\
    ✅ Premium access activated\n\
    🎨 You can now generate images without limits\n\n\
    Return to the app and start creating!";

pub fn unknown_action(action: &str) -> String {
    format!("❌ Unknown action: {}", action)
}

pub fn subscription_status(has_access: bool) -> String {
    let status = if has_access { HAS_ACCESS } else { NO_ACCESS };
    format!("🔍 Subscription check:\n{}", status)
}
