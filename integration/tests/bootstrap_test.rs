use helpers::{
    exit_code, run_bootstrap, BootstrapError, FixedClock, QuestWindow, Stage, StackUpContract,
    StackUpDeployer, QUEST_WINDOW_SECS, STACKUP_QUESTS,
};
use integration::recording::{
    Call, Failure, RecordingDeployer, ADMIN_ADDRESS, CONTRACT_ADDRESS,
};

const T: u64 = 1_700_000_000;

#[tokio::test]
async fn test_bootstrap_creates_three_quests() -> anyhow::Result<()> {
    let deployer = RecordingDeployer::new();

    let result = run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await;
    assert_eq!(exit_code(&result), 0);

    let report = result?;
    assert_eq!(report.contract, CONTRACT_ADDRESS);
    assert_eq!(report.admin, ADMIN_ADDRESS);
    assert_eq!(report.window, QuestWindow::starting_at(T));
    assert_eq!(report.quests.len(), 3);

    let titles: Vec<_> = report.quests.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Introduction to Hardhat",
            "Unit Testing with Hardhat",
            "Debugging and Deploying with Hardhat",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_call_sequence_is_deploy_admin_then_quests_in_order() -> anyhow::Result<()> {
    let deployer = RecordingDeployer::new();
    run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await?;

    let calls = deployer.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0], Call::Deploy);
    assert_eq!(calls[1], Call::Admin);

    let window = QuestWindow::starting_at(T);
    for (call, seed) in calls[2..].iter().zip(STACKUP_QUESTS.iter()) {
        assert_eq!(call, &Call::CreateQuest(seed.with_window(window)));
    }

    let quests = deployer.created_quests();
    assert_eq!(
        quests
            .iter()
            .map(|q| (q.tier, q.reward_count))
            .collect::<Vec<_>>(),
        [(2, 600), (4, 500), (5, 400)]
    );
    Ok(())
}

#[tokio::test]
async fn test_quests_are_created_one_at_a_time() -> anyhow::Result<()> {
    let deployer = RecordingDeployer::new();
    run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await?;

    assert_eq!(deployer.created_quests().len(), 3);
    assert!(!deployer.overlap_seen(), "createQuest calls overlapped");
    Ok(())
}

#[tokio::test]
async fn test_overlapping_quest_calls_are_detected() -> anyhow::Result<()> {
    let deployer = RecordingDeployer::new();
    let contract = deployer.deploy().await?;

    let window = QuestWindow::starting_at(T);
    let first = STACKUP_QUESTS[0].with_window(window);
    let second = STACKUP_QUESTS[1].with_window(window);
    let (a, b) = tokio::join!(contract.create_quest(&first), contract.create_quest(&second));
    a?;
    b?;

    assert!(deployer.overlap_seen());
    Ok(())
}

#[tokio::test]
async fn test_window_is_shared_and_ten_hours_long() -> anyhow::Result<()> {
    for _ in 0..8 {
        // stay clear of u64::MAX so start + window cannot saturate
        let now = rand::random::<u32>() as u64;
        let deployer = RecordingDeployer::new();
        run_bootstrap(&deployer, &FixedClock(now), &STACKUP_QUESTS).await?;

        let quests = deployer.created_quests();
        assert_eq!(quests.len(), 3);
        for quest in &quests {
            assert_eq!(quest.start_time, now);
            assert_eq!(quest.end_time, now + QUEST_WINDOW_SECS);
            assert_eq!(quest.end_time - quest.start_time, 36_000);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_failed_deployment_issues_no_quests() {
    let deployer = RecordingDeployer::failing(Failure::Deploy);

    let result = run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await;
    assert_eq!(exit_code(&result), 1);

    let err = result.unwrap_err();
    assert!(matches!(err, BootstrapError::Deployment(_)));
    assert_eq!(err.stage(), Stage::Deploying);
    assert_eq!(deployer.calls(), vec![Call::Deploy]);
}

#[tokio::test]
async fn test_failed_admin_read_issues_no_quests() {
    let deployer = RecordingDeployer::failing(Failure::Admin);

    let result = run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await;
    assert_eq!(exit_code(&result), 1);
    assert!(matches!(result, Err(BootstrapError::AdminRead(_))));
    assert!(deployer.created_quests().is_empty());
}

#[tokio::test]
async fn test_failed_quest_keeps_earlier_quests_and_stops() {
    let deployer = RecordingDeployer::failing(Failure::CreateQuest(2));

    let result = run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await;
    assert_eq!(exit_code(&result), 1);

    match result {
        Err(BootstrapError::CreateQuest { index, title, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(title, "Unit Testing with Hardhat");
        }
        other => panic!("expected createQuest failure, got {other:?}"),
    }

    // quest 1 confirmed, quest 2 attempted, quest 3 never sent
    let titles: Vec<_> = deployer
        .created_quests()
        .into_iter()
        .map(|q| q.title)
        .collect();
    assert_eq!(
        titles,
        ["Introduction to Hardhat", "Unit Testing with Hardhat"]
    );
}

#[tokio::test]
async fn test_last_quest_failure_still_fails_run() {
    let deployer = RecordingDeployer::failing(Failure::CreateQuest(3));

    let result = run_bootstrap(&deployer, &FixedClock(T), &STACKUP_QUESTS).await;
    assert_eq!(exit_code(&result), 1);
    assert_eq!(result.unwrap_err().stage(), Stage::CreatingQuest(3));
    assert_eq!(deployer.created_quests().len(), 3);
}
