//! Shared test fixtures: a throwaway database per test plus random records.

use platzigram::{Config, Db, NewImage, NewUser};
use tempfile::TempDir;
use uuid::Uuid;

/// A connected [`Db`] backed by a temp directory that is removed when the
/// fixture is dropped.
pub struct TestDb {
    pub db: Db,
    pub config: Config,
    _dir: TempDir,
}

pub async fn setup_db() -> TestDb {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let dir = TempDir::new().expect("create temp dir");
    let config = Config {
        data_dir: dir.path().to_string_lossy().into_owned(),
        db: format!("platzigram_{}", Uuid::new_v4().simple()),
        setup: true,
    };
    let mut db = Db::new(config.clone());
    db.connect().await.expect("connect to fresh database");
    assert!(db.is_connected());

    TestDb {
        db,
        config,
        _dir: dir,
    }
}

pub fn an_image() -> NewImage {
    NewImage {
        description: "an #awesome picture with #tags #platzi".to_string(),
        url: format!("https://platzigram.test/{}.jpg", Uuid::new_v4()),
        user_id: Uuid::new_v4().to_string(),
    }
}

pub fn a_user() -> NewUser {
    NewUser {
        name: "A random user".to_string(),
        username: format!("user_{}", Uuid::new_v4().simple()),
        password: Uuid::new_v4().to_string(),
        email: format!("{}@platzi.test", Uuid::new_v4().simple()),
    }
}
