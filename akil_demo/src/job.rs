use std::sync::LazyLock;

use akil_models::job::{Job, JobDetail};

pub static ALL_JOBS: LazyLock<Vec<&Job>> = LazyLock::new(|| vec![&ENGINEER, &DESIGNER, &OPERATOR]);

pub static ENGINEER: LazyLock<Job> = LazyLock::new(|| Job {
    id: "job-id-1".try_into().unwrap(),
    title: "Software Engineer".try_into().unwrap(),
    description: "Build and operate the opportunity platform.".into(),
    org_name: "Africa to Silicon Valley".into(),
    categories: vec!["IT".into(), "Backend".into()],
    op_type: "inPerson".into(),
    location: vec!["Addis Ababa".into(), "Ethiopia".into()],
    logo_url: Some("https://cdn.akil.jobs/logos/a2sv.png".parse().unwrap()),
});

pub static DESIGNER: LazyLock<Job> = LazyLock::new(|| Job {
    id: "job-id-2".try_into().unwrap(),
    title: "Product Designer".try_into().unwrap(),
    description: "Own the visual language of the job board.".into(),
    org_name: "Akil".into(),
    categories: vec!["Design".into()],
    op_type: "virtual".into(),
    location: vec!["Remote".into()],
    logo_url: None,
});

pub static OPERATOR: LazyLock<Job> = LazyLock::new(|| Job {
    id: "job-id-3".try_into().unwrap(),
    title: "Operations Associate".try_into().unwrap(),
    description: "Keep partner organizations onboarded and happy.".into(),
    org_name: "Akil".into(),
    categories: vec!["Operations".into(), "Education".into()],
    op_type: "inPerson".into(),
    location: vec!["Nairobi".into(), "Kenya".into()],
    logo_url: None,
});

pub static ENGINEER_DETAIL: LazyLock<JobDetail> = LazyLock::new(|| JobDetail {
    job: ENGINEER.clone(),
    responsibilities: "Design APIs\nReview code\nShip features".into(),
    ideal_candidate: "A pragmatic generalist.".into(),
    when_and_where: "Onsite, Addis Ababa office.".into(),
    required_skills: vec!["Rust".into(), "SQL".into()],
    date_posted: Some("2023-07-07T09:58:00Z".parse().unwrap()),
    deadline: Some("2023-08-07T09:58:00Z".parse().unwrap()),
    start_date: Some("2023-09-01T00:00:00Z".parse().unwrap()),
    end_date: None,
});
