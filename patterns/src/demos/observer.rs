//! Observer — channel uploads notify every current subscriber

/// Anything that wants to hear about new videos
trait Observer {
    fn id(&self) -> &str;
    fn on_upload(&self, title: &str) -> String;
}

struct Subscriber {
    name: String,
}

impl Subscriber {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for Subscriber {
    fn id(&self) -> &str {
        &self.name
    }

    fn on_upload(&self, title: &str) -> String {
        format!("{}: new video from a subscribed channel: {}", self.name, title)
    }
}

/// The subject. Keeps its subscriber list and fans uploads out to it.
#[derive(Default)]
struct Channel {
    subscribers: Vec<Box<dyn Observer>>,
}

impl Channel {
    fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.subscribers.push(observer);
    }

    fn unsubscribe(&mut self, id: &str) {
        self.subscribers.retain(|s| s.id() != id);
    }

    fn upload(&self, title: &str) -> Vec<String> {
        self.subscribers
            .iter()
            .map(|s| s.on_upload(title))
            .collect()
    }
}

pub fn run() -> Vec<String> {
    let mut channel = Channel::default();
    channel.subscribe(Box::new(Subscriber::new("Minsu")));
    channel.subscribe(Box::new(Subscriber::new("Sujin")));

    let mut lines = channel.upload("Rust Basics");

    channel.unsubscribe("Minsu");
    lines.extend(channel.upload("Rust Ownership"));
    lines
}
