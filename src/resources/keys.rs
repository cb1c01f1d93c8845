//! Resource identities and URI construction

use std::fmt;
use url::form_urlencoded::byte_serialize;

/// Identifies a resource record set: zone, record type and owner name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RRSetKey {
    /// Zone name, e.g. `example.com.`
    pub zone: String,
    /// Record type, e.g. `A`
    pub rtype: String,
    /// Owner name, e.g. `www`
    pub name: String,
}

impl RRSetKey {
    /// Create a new RRSet key
    pub fn new(zone: impl Into<String>, rtype: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            rtype: rtype.into(),
            name: name.into(),
        }
    }

    /// Path of the RRSet itself
    pub fn uri(&self) -> String {
        format!("zones/{}/rrsets/{}/{}", self.zone, self.rtype, self.name)
    }

    /// Path of the RRSet's probe alerts
    pub fn alerts_uri(&self) -> String {
        format!("{}/alerts", self.uri())
    }

    /// Alerts path for the page starting at `offset`
    pub fn alerts_query_uri(&self, offset: u32) -> String {
        with_params(self.alerts_uri(), &offset_param(offset))
    }

    /// Path of the RRSet's events
    pub fn events_uri(&self) -> String {
        format!("{}/events", self.uri())
    }

    /// Events path filtered by `query`, for the page starting at `offset`
    pub fn events_query_uri(&self, query: &str, offset: u32) -> String {
        with_params(self.events_uri(), &filter_params(query, offset))
    }

    /// Path of the RRSet's notifications
    pub fn notifications_uri(&self) -> String {
        format!("{}/notifications", self.uri())
    }

    /// Notifications path filtered by `query`, for the page starting at `offset`
    pub fn notifications_query_uri(&self, query: &str, offset: u32) -> String {
        with_params(self.notifications_uri(), &filter_params(query, offset))
    }

    /// Path of the RRSet's probes
    pub fn probes_uri(&self) -> String {
        format!("{}/probes", self.uri())
    }

    /// Probes path filtered by `query`, sorted by name
    pub fn probes_query_uri(&self, query: &str) -> String {
        if query.is_empty() {
            return self.probes_uri();
        }
        with_params(
            self.probes_uri(),
            &[("sort", "NAME".to_string()), ("query", encode(query))],
        )
    }
}

impl fmt::Display for RRSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zone, self.rtype, self.name)
    }
}

/// An RRSet together with a list filter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RRSetQuery {
    /// The RRSet being listed
    pub key: RRSetKey,
    /// Filter expression, empty for none
    pub query: String,
}

impl RRSetQuery {
    /// Create a filtered RRSet query
    pub fn new(key: RRSetKey, query: impl Into<String>) -> Self {
        Self {
            key,
            query: query.into(),
        }
    }
}

impl From<RRSetKey> for RRSetQuery {
    fn from(key: RRSetKey) -> Self {
        Self::new(key, "")
    }
}

/// Identifies one event of an RRSet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    /// Zone name
    pub zone: String,
    /// Record type
    pub rtype: String,
    /// Owner name
    pub name: String,
    /// Event id
    pub guid: String,
}

impl EventKey {
    /// Create a new event key
    pub fn new(
        zone: impl Into<String>,
        rtype: impl Into<String>,
        name: impl Into<String>,
        guid: impl Into<String>,
    ) -> Self {
        Self {
            zone: zone.into(),
            rtype: rtype.into(),
            name: name.into(),
            guid: guid.into(),
        }
    }

    /// The RRSet this event belongs to
    pub fn rrset_key(&self) -> RRSetKey {
        RRSetKey::new(&self.zone, &self.rtype, &self.name)
    }

    /// Path of the event
    pub fn uri(&self) -> String {
        format!("{}/{}", self.rrset_key().events_uri(), self.guid)
    }
}

/// Path of an event, or of the event collection when `guid` is empty
pub fn event_path(zone: &str, rtype: &str, name: &str, guid: &str) -> String {
    let key = EventKey::new(zone, rtype, name, guid);
    if guid.is_empty() {
        key.rrset_key().events_uri()
    } else {
        key.uri()
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

fn offset_param(offset: u32) -> Vec<(&'static str, String)> {
    if offset == 0 {
        Vec::new()
    } else {
        vec![("offset", offset.to_string())]
    }
}

fn filter_params(query: &str, offset: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if !query.is_empty() {
        params.push(("q", encode(query)));
    }
    params.extend(offset_param(offset));
    params
}

fn with_params(uri: String, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return uri;
    }
    let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{uri}?{}", query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn key() -> RRSetKey {
        RRSetKey::new("example.com.", "A", "www")
    }

    #[test]
    fn test_rrset_uris() {
        let key = key();
        assert_eq!(key.uri(), "zones/example.com./rrsets/A/www");
        assert_eq!(key.alerts_uri(), "zones/example.com./rrsets/A/www/alerts");
        assert_eq!(key.events_uri(), "zones/example.com./rrsets/A/www/events");
        assert_eq!(
            key.notifications_uri(),
            "zones/example.com./rrsets/A/www/notifications"
        );
        assert_eq!(key.probes_uri(), "zones/example.com./rrsets/A/www/probes");
        assert_eq!(key.to_string(), "example.com./A/www");
    }

    #[test_case(0, "zones/example.com./rrsets/A/www/alerts" ; "first page omits offset")]
    #[test_case(25, "zones/example.com./rrsets/A/www/alerts?offset=25" ; "later page")]
    fn test_alerts_query_uri(offset: u32, expected: &str) {
        assert_eq!(key().alerts_query_uri(offset), expected);
    }

    #[test_case("", 0, "zones/example.com./rrsets/A/www/events" ; "no filter")]
    #[test_case("", 10, "zones/example.com./rrsets/A/www/events?offset=10" ; "offset only")]
    #[test_case("type:FAILOVER", 0, "zones/example.com./rrsets/A/www/events?q=type%3AFAILOVER" ; "query only")]
    #[test_case("a b", 5, "zones/example.com./rrsets/A/www/events?q=a+b&offset=5" ; "query and offset")]
    fn test_events_query_uri(query: &str, offset: u32, expected: &str) {
        assert_eq!(key().events_query_uri(query, offset), expected);
    }

    #[test]
    fn test_notifications_query_uri() {
        assert_eq!(
            key().notifications_query_uri("email:ops", 3),
            "zones/example.com./rrsets/A/www/notifications?q=email%3Aops&offset=3"
        );
    }

    #[test]
    fn test_probes_query_uri() {
        assert_eq!(key().probes_query_uri(""), key().probes_uri());
        assert_eq!(
            key().probes_query_uri("type:HTTP"),
            "zones/example.com./rrsets/A/www/probes?sort=NAME&query=type%3AHTTP"
        );
    }

    #[test]
    fn test_event_key() {
        let event = EventKey::new("example.com.", "A", "www", "abc123");
        assert_eq!(event.rrset_key(), key());
        assert_eq!(event.uri(), "zones/example.com./rrsets/A/www/events/abc123");
    }

    #[test]
    fn test_event_path() {
        assert_eq!(
            event_path("example.com.", "A", "www", ""),
            "zones/example.com./rrsets/A/www/events"
        );
        assert_eq!(
            event_path("example.com.", "A", "www", "abc123"),
            "zones/example.com./rrsets/A/www/events/abc123"
        );
    }

    #[test]
    fn test_rrset_query_from_key() {
        let query = RRSetQuery::from(key());
        assert_eq!(query.key, key());
        assert!(query.query.is_empty());
    }
}
