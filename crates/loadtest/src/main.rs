use goose::prelude::*;

async fn health_check(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/api/health").await?;
    Ok(())
}

async fn get_project_info(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/api/project-info").await?;
    Ok(())
}

async fn get_index(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/").await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(
            scenario!("HealthCheck").register_transaction(transaction!(health_check)),
        )
        .register_scenario(
            scenario!("Showcase")
                .register_transaction(transaction!(get_index))
                .register_transaction(transaction!(get_project_info)),
        )
        .execute()
        .await?;

    Ok(())
}
