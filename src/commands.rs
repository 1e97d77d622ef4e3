//! In-band language switch command ("switch to <language>").

use babel_core::{languages::lang_code, traits::PreferenceStore};
use tracing::{debug, error, info};

/// Phrase that marks a message as a language switch request.
pub const SWITCH_PHRASE: &str = "switch to";

/// Outcome of inspecting a user message for a switch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchAttempt {
    /// The message does not contain the switch phrase.
    NotASwitchCommand,
    /// The phrase was found and the preference was set to this code.
    SwitchSucceeded(&'static str),
    /// The phrase was found but no language token follows it.
    SwitchMalformed,
}

/// Detect a switch command and persist the requested language.
///
/// The language is the third whitespace-separated token of the lowercased
/// message, wherever the phrase itself appears. A failed preference write
/// is logged and otherwise ignored: the command still counts as handled.
pub async fn intercept(store: &dyn PreferenceStore, message: &str, user_id: &str) -> SwitchAttempt {
    let lowered = message.to_lowercase();
    if !lowered.contains(SWITCH_PHRASE) {
        return SwitchAttempt::NotASwitchCommand;
    }

    let Some(language) = lowered.split_whitespace().nth(2) else {
        error!("[interceptor] Invalid switch intent from user {user_id}: {message:?}");
        return SwitchAttempt::SwitchMalformed;
    };
    debug!("[interceptor] User {user_id} wants to switch to {language}");

    let code = lang_code(language);
    debug!("[interceptor] Language code for {language} is {code}");

    match store.put(user_id, code).await {
        Ok(()) => info!("[interceptor] Updated the preferred language for user: {user_id}"),
        Err(e) => error!("[interceptor] Failed to update preferred language for {user_id}: {e}"),
    }

    SwitchAttempt::SwitchSucceeded(code)
}
