//! Tests for the client-side chat state machine and reveal behavior

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{Error, Result, bail};
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use chatrelay::chat::{
        BotReply, ChatClient, ChatTransport, EMPTY_REPLY_TEXT, SEND_FAILED_TEXT, Sender,
    };

    /// Transport that answers from a fixed script and counts calls
    struct ScriptedTransport {
        reply: Option<String>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl ScriptedTransport {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn without_reply() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ChatTransport for ScriptedTransport {
        async fn send(&self, _message: &str) -> Result<BotReply, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                bail!("scripted transport failure");
            }
            Ok(BotReply {
                reply: self.reply.clone(),
            })
        }
    }

    #[tokio::test]
    async fn it_appends_user_message_then_revealed_reply() {
        let transport = ScriptedTransport::replying("Hello there friend");
        let mut client = ChatClient::new(Arc::clone(&transport));

        client.send("hello").await;

        let messages = client.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[1].text, "Hello there friend");
        assert!(!client.is_typing());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn it_ignores_empty_and_whitespace_only_input() {
        let transport = ScriptedTransport::replying("unused");
        let mut client = ChatClient::new(Arc::clone(&transport));

        client.send("").await;
        client.send("   \t  ").await;

        assert!(client.transcript().is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn it_appends_fixed_error_on_transport_failure() {
        let transport = ScriptedTransport::failing();
        let mut client = ChatClient::new(Arc::clone(&transport));

        client.send("hello").await;

        let messages = client.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[1].text, SEND_FAILED_TEXT);
        assert!(!client.is_typing());
    }

    #[tokio::test]
    async fn it_substitutes_fallback_for_empty_reply() {
        let transport = ScriptedTransport::replying("");
        let mut client = ChatClient::new(transport);

        client.send("hello").await;

        let messages = client.transcript().messages();
        assert_eq!(messages[1].text, EMPTY_REPLY_TEXT);
    }

    #[tokio::test]
    async fn it_substitutes_fallback_for_missing_reply() {
        let transport = ScriptedTransport::without_reply();
        let mut client = ChatClient::new(transport);

        client.send("hello").await;

        let messages = client.transcript().messages();
        assert_eq!(messages[1].text, EMPTY_REPLY_TEXT);
    }

    /// The reveal grows the displayed text through prefixes of the
    /// final reply, one word at a time
    #[tokio::test]
    async fn it_reveals_reply_word_by_word() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let transport = ScriptedTransport::replying("one two three");
        let mut client = ChatClient::with_updates(transport, tx);

        client.send("hello").await;
        drop(client);

        let mut partials = Vec::new();
        let mut rebuilt = String::new();
        while let Some(delta) = rx.recv().await {
            rebuilt.push_str(&delta);
            partials.push(rebuilt.clone());
        }

        assert_eq!(partials, vec!["one", "one two", "one two three"]);
        for partial in &partials {
            assert!("one two three".starts_with(partial.as_str()));
        }
    }

    /// Repeating a message produces independent entries in send
    /// order and earlier entries never mutate
    #[tokio::test]
    async fn it_keeps_repeat_sends_independent() {
        let transport = ScriptedTransport::replying("same answer");
        let mut client = ChatClient::new(Arc::clone(&transport));

        client.send("again").await;
        let after_first = client.transcript().messages();

        client.send("again").await;
        let after_second = client.transcript().messages();

        assert_eq!(after_first.len(), 2);
        assert_eq!(after_second.len(), 4);
        assert_eq!(&after_second[..2], &after_first[..]);
        assert_eq!(after_second[2].text, "again");
        assert_eq!(after_second[3].text, "same answer");
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }
}
