//! Shared fixtures for the app tests.

use crate::app::AppState;
use crate::bookmarks::BookmarkStore;
use crate::domain::Document;
use crate::storage::{KeyValueStore, MemoryStore, PreferenceStore};

pub const FIXTURE: &str = r#"[
    {
        "title": "제1장 총칙 (General)",
        "description": "규정의 목적, 참고 문헌, 용어 설명",
        "icon": "📋",
        "sections": [
            { "title": "1-1. 목적", "content": "이 규정은 카투사 운영에 관한 사항을 정한다." },
            { "title": "1-2. 용어", "content": "용어: 이 규정에서 사용하는 용어의 뜻\n\n- 카투사\n- 지원단" },
            { "title": "1-3. 포상 개요", "content": "첫째 문단이다. 포상 제도를 설명한다.\n\n1. 모범 장병 포상\n2. 부대 포상\n3. 특별 포상\n\n둘째 문단은 여러 줄로 이루어진다.\n세 번째 줄.\n네 번째 줄.\n다섯 번째 줄.\n여섯 번째 줄.\n일곱 번째 줄.\n여덟 번째 줄." }
        ]
    },
    {
        "title": "제5장 복지",
        "sections": [
            { "title": "5-1. 보건", "content": "보건 시설 이용 안내" },
            { "title": "5-2. PX", "content": "PX. 이용 시간: 09:00 - 18:00\n\nPXA 시설은 포상 휴가자에게 개방된다." }
        ]
    },
    {
        "title": "부록",
        "sections": []
    }
]"#;

pub fn state() -> AppState {
    state_with_backends(Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
}

pub fn state_with_backends(
    bookmarks: Box<dyn KeyValueStore>,
    preferences: Box<dyn KeyValueStore>,
) -> AppState {
    let document = Document::from_json(FIXTURE).unwrap();
    AppState::new(
        document,
        BookmarkStore::load(bookmarks),
        PreferenceStore::load(preferences),
    )
}
