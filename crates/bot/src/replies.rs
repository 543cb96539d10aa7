// Reply texts

use mediaq_core::domain::QueueId;

pub const MISSING_URL: &str = "Please provide a URL!\nFor examples see /help.";

pub const INVALID_URL: &str = "Sorry, that doesn't look like a valid URL\nFor examples see /help.";

pub fn start(queue_id: &QueueId) -> String {
    format!("The queue id for this chat is: {queue_id}")
}

pub fn help(queue_id: &QueueId) -> String {
    format!(
        "Welcome to MediaQBot!\n\
         Use /add to add a URL of a web video.\n\
         \n\
         When starting the player, this will be your playlist id:\n\
         {queue_id}"
    )
}
