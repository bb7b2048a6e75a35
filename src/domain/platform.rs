// Client-side capabilities the session invalidator needs.
// Hosts without persistent client state simply do not provide one.
pub trait ClientPlatform: Send + Sync {
    // Wipe every persisted key, not a selection.
    fn clear_storage(&self);
    fn navigate(&self, location: &str);
}
