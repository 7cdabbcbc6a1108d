use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Patronymic).string().null())
                    .col(ColumnDef::new(Users::Division).string().null())
                    .col(
                        ColumnDef::new(Users::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(
                        ColumnDef::new(Users::RegisteredAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 地点表
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::Name).string().not_null())
                    .col(ColumnDef::new(Locations::Prefab).string().null())
                    .col(
                        ColumnDef::new(Locations::Status)
                            .string()
                            .not_null()
                            .default("DEVELOPING"),
                    )
                    .to_owned(),
            )
            .await?;

        // 传感器类型表
        manager
            .create_table(
                Table::create()
                    .table(SensorTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorTypes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SensorTypes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 仪表型号表
        manager
            .create_table(
                Table::create()
                    .table(Models::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Models::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Models::Specification).text().not_null())
                    .col(
                        ColumnDef::new(Models::SensorTypeId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Models::Table, Models::SensorTypeId)
                            .to(SensorTypes::Table, SensorTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 传感器表
        manager
            .create_table(
                Table::create()
                    .table(Sensors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sensors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sensors::Name).string().not_null())
                    .col(ColumnDef::new(Sensors::Kks).string().not_null())
                    .col(ColumnDef::new(Sensors::ModelId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sensors::Table, Sensors::ModelId)
                            .to(Models::Table, Models::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 事故表
        manager
            .create_table(
                Table::create()
                    .table(Accidents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accidents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accidents::Name).string().not_null())
                    .col(
                        ColumnDef::new(Accidents::MechanicalAccident)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Accidents::ChangeValue).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 场景表
        manager
            .create_table(
                Table::create()
                    .table(Scenarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scenarios::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scenarios::Name).string().not_null())
                    .col(
                        ColumnDef::new(Scenarios::LocationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scenarios::SensorId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scenarios::Table, Scenarios::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Scenarios::Table, Scenarios::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 场景-事故 关联表
        manager
            .create_table(
                Table::create()
                    .table(ScenarioAccidents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScenarioAccidents::ScenarioId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScenarioAccidents::AccidentId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ScenarioAccidents::ScenarioId)
                            .col(ScenarioAccidents::AccidentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScenarioAccidents::Table, ScenarioAccidents::ScenarioId)
                            .to(Scenarios::Table, Scenarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScenarioAccidents::Table, ScenarioAccidents::AccidentId)
                            .to(Accidents::Table, Accidents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 传感器-地点 关联表
        manager
            .create_table(
                Table::create()
                    .table(SensorLocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorLocations::SensorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SensorLocations::LocationId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SensorLocations::SensorId)
                            .col(SensorLocations::LocationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SensorLocations::Table, SensorLocations::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SensorLocations::Table, SensorLocations::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 型号-事故 关联表
        manager
            .create_table(
                Table::create()
                    .table(ModelAccidents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModelAccidents::ModelId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ModelAccidents::AccidentId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ModelAccidents::ModelId)
                            .col(ModelAccidents::AccidentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ModelAccidents::Table, ModelAccidents::ModelId)
                            .to(Models::Table, Models::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ModelAccidents::Table, ModelAccidents::AccidentId)
                            .to(Accidents::Table, Accidents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 考核任务表
        manager
            .create_table(
                Table::create()
                    .table(Admissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admissions::Rating)
                            .string_len(3)
                            .not_null()
                            .default("0"),
                    )
                    .col(ColumnDef::new(Admissions::Status).string().not_null())
                    .col(ColumnDef::new(Admissions::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Admissions::ScenarioId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Admissions::IsReady).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Admissions::Table, Admissions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Admissions::Table, Admissions::ScenarioId)
                            .to(Scenarios::Table, Scenarios::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admissions_user_id")
                    .table(Admissions::Table)
                    .col(Admissions::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_admissions_scenario_id")
                    .table(Admissions::Table)
                    .col(Admissions::ScenarioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scenarios_location_id")
                    .table(Scenarios::Table)
                    .col(Scenarios::LocationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Admissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ModelAccidents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorLocations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScenarioAccidents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scenarios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accidents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sensors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Models::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SensorTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Patronymic,
    Division,
    IsStaff,
    IsSuperuser,
    IsActive,
    LastLogin,
    RegisteredAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Locations {
    #[sea_orm(iden = "locations")]
    Table,
    Id,
    Name,
    Prefab,
    Status,
}

#[derive(DeriveIden)]
enum SensorTypes {
    #[sea_orm(iden = "sensor_types")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Models {
    #[sea_orm(iden = "models")]
    Table,
    Id,
    Specification,
    SensorTypeId,
}

#[derive(DeriveIden)]
enum Sensors {
    #[sea_orm(iden = "sensors")]
    Table,
    Id,
    Name,
    Kks,
    ModelId,
}

#[derive(DeriveIden)]
enum Accidents {
    #[sea_orm(iden = "accidents")]
    Table,
    Id,
    Name,
    MechanicalAccident,
    ChangeValue,
}

#[derive(DeriveIden)]
enum Scenarios {
    #[sea_orm(iden = "scenarios")]
    Table,
    Id,
    Name,
    LocationId,
    SensorId,
}

#[derive(DeriveIden)]
enum ScenarioAccidents {
    #[sea_orm(iden = "scenario_accidents")]
    Table,
    ScenarioId,
    AccidentId,
}

#[derive(DeriveIden)]
enum SensorLocations {
    #[sea_orm(iden = "sensor_locations")]
    Table,
    SensorId,
    LocationId,
}

#[derive(DeriveIden)]
enum ModelAccidents {
    #[sea_orm(iden = "model_accidents")]
    Table,
    ModelId,
    AccidentId,
}

#[derive(DeriveIden)]
enum Admissions {
    #[sea_orm(iden = "admissions")]
    Table,
    Id,
    Rating,
    Status,
    UserId,
    ScenarioId,
    IsReady,
}
