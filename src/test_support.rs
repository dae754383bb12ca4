//! Fixtures shared by unit tests.

use crate::model::EventList;

pub(crate) const EVENT_LIST_JSON: &str = r#"{
    "name": "Asha",
    "email": "asha@college.edu",
    "department": "CSE",
    "batch": "A",
    "graduationYear": "2026",
    "events": [
        {
            "id": 1,
            "name": "Hack Night",
            "description": "Overnight build session",
            "image": "/media/hack.png",
            "venue": "Main Hall",
            "eventStartDate": "2026-11-02",
            "eventStartTime": "18:00",
            "eventEndDate": "2026-11-03",
            "eventEndTime": "06:30:00",
            "regOpen": true,
            "isRegistrationFull": false,
            "regStartDate": "2026-10-01",
            "regStartTime": "09:00",
            "regEndDate": "2026-10-30",
            "regEndTime": "23:59",
            "durationDays": 2,
            "fee": 150.0,
            "food": "Dinner and breakfast",
            "team": { "min": 2, "max": 4 },
            "registrationId": "r-19",
            "teamId": "t-4",
            "teamName": "Null Pointers",
            "teamCode": "NP42",
            "teamLead": { "id": "u-1", "name": "Asha" },
            "teamMembers": [
                { "id": "u-1", "name": "Asha" },
                { "id": "u-2", "name": "Karthik" }
            ],
            "isTeamLead": true,
            "currentMembers": 37,
            "maxRegistrations": 40
        },
        {
            "id": 2,
            "name": "Intro to Rust",
            "description": "Workshop",
            "image": "/media/rust.png",
            "venue": "Lab 3",
            "eventStartDate": "2026-12-01",
            "eventStartTime": "10:00",
            "eventEndDate": "2026-12-01",
            "eventEndTime": "13:00",
            "regOpen": false,
            "isRegistrationFull": true,
            "regStartDate": "2026-11-01",
            "regStartTime": "09:00",
            "regEndDate": "2026-11-20",
            "regEndTime": "18:00",
            "durationDays": 1,
            "fee": 0,
            "food": "",
            "team": { "min": 1, "max": 1 }
        }
    ]
}"#;

pub(crate) fn sample_event_list() -> EventList {
    serde_json::from_str(EVENT_LIST_JSON).unwrap()
}
