use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient, Violations};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Member {
    id: u64,
    name: String,
    team: String,
}

#[derive(Debug)]
struct MemberCreate {
    name: String,
    team: String,
}

#[derive(Debug, Default)]
struct MemberUpdate {
    name: Option<String>,
    team: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum MemberError {
    #[error("reserved name: {0}")]
    Reserved(String),
    #[error("member error: {0}")]
    Other(String),
}

#[async_trait]
impl ActorEntity for Member {
    type Id = u64;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Context = ();
    type Error = MemberError;

    fn from_create_params(id: u64, params: MemberCreate) -> Result<Self, Self::Error> {
        if params.name == "root" {
            return Err(MemberError::Reserved(params.name));
        }
        Ok(Self {
            id,
            name: params.name,
            team: params.team,
        })
    }

    fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .require_present("name", &self.name)
            .require_present("team", &self.team);
        violations
    }

    async fn on_update(
        &mut self,
        update: MemberUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(team) = update.team {
            self.team = team;
        }
        Ok(())
    }
}

fn member(name: &str, team: &str) -> MemberCreate {
    MemberCreate {
        name: name.to_string(),
        team: team.to_string(),
    }
}

fn start() -> ResourceClient<Member> {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));
    client
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = start();

    // 1. Create
    let created = client.create(member("Alice", "core")).await.unwrap();
    assert_eq!(created.id, 1); // First ID should be 1
    assert_eq!(created.name, "Alice");

    // 2. Get
    let fetched = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    // 3. Update one field
    let update = MemberUpdate {
        name: Some("Bob".into()),
        ..Default::default()
    };
    let updated = client.update(created.id, update).await.unwrap();
    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.team, "core");

    // 4. Delete
    client.delete(created.id).await.unwrap();
    assert!(client.get(created.id).await.unwrap().is_none());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let client = start();
    assert!(client.list().await.unwrap().is_empty());

    for name in ["a", "b", "c"] {
        client.create(member(name, "core")).await.unwrap();
    }

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_invalid_create_is_not_stored() {
    let client = start();

    let result = client.create(member("", "")).await;
    match result {
        Err(FrameworkError::Invalid(violations)) => {
            assert!(violations.has_field("name"));
            assert!(violations.has_field("team"));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
    assert!(client.list().await.unwrap().is_empty());

    // The rejected create still consumed an ID.
    let created = client.create(member("Alice", "core")).await.unwrap();
    assert_eq!(created.id, 2);
}

#[tokio::test]
async fn test_invalid_update_leaves_entity_unchanged() {
    let client = start();
    let created = client.create(member("Alice", "core")).await.unwrap();

    let update = MemberUpdate {
        name: Some("Alicia".into()),
        team: Some("  ".into()),
    };
    let result = client.update(created.id, update).await;
    assert!(matches!(result, Err(FrameworkError::Invalid(v)) if v.len() == 1));

    // Neither field was applied, not even the valid one.
    let stored = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_entity_error_on_create() {
    let client = start();

    let result = client.create(member("root", "ops")).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_id_is_not_found() {
    let client = start();

    assert!(client.get(42).await.unwrap().is_none());

    let result = client.update(42, MemberUpdate::default()).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));

    let result = client.delete(42).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let client = start();
    let first = client.create(member("a", "core")).await.unwrap();
    client.create(member("b", "core")).await.unwrap();

    client.delete(first.id).await.unwrap();

    let remaining = client.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "b");
}

#[tokio::test]
async fn test_actor_stops_when_clients_dropped() {
    let (actor, client) = ResourceActor::<Member>::new(10);
    let handle = tokio::spawn(actor.run(()));
    let other = client.clone();

    client.create(member("Alice", "core")).await.unwrap();
    drop(client);

    // A remaining clone keeps the actor serving.
    assert_eq!(other.list().await.unwrap().len(), 1);

    drop(other);
    handle.await.unwrap();
}

// --- ActorClient default methods ---

struct MemberClient {
    inner: ResourceClient<Member>,
}

#[async_trait]
impl ActorClient<Member> for MemberClient {
    type Error = MemberError;

    fn inner(&self) -> &ResourceClient<Member> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MemberError::Other(e.to_string())
    }
}

#[tokio::test]
async fn test_actor_client_defaults() {
    let inner = start();
    let created = inner.create(member("Alice", "core")).await.unwrap();
    let client = MemberClient { inner };

    assert_eq!(client.list().await.unwrap().len(), 1);
    assert!(client.get(created.id).await.unwrap().is_some());

    client.delete(created.id).await.unwrap();
    let err = client.delete(created.id).await.unwrap_err();
    assert!(matches!(err, MemberError::Other(msg) if msg.contains("not found")));
}
