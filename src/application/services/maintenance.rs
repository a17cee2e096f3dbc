//! Maintenance use-cases and the monthly request report

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    monthly_counts, DomainError, DomainResult, Maintenance, MaintenanceDraft, MaintenanceFilter,
    MonthlyRequests, NewMaintenance, UnitOfWork, UnitOfWorkFactory, YearMonth,
};

pub struct MaintenanceService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl MaintenanceService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    pub async fn get_maintenance_by_id(&self, id: i32) -> DomainResult<Maintenance> {
        let uow = self.uow.begin().await?;
        let maintenance = find(uow.as_ref(), id, "Maintenance not found!").await?;
        uow.commit().await?;
        Ok(maintenance)
    }

    /// Maintenances matching every filter that is set. An empty result is
    /// reported as `NotFound`.
    pub async fn get_maintenances(
        &self,
        filter: &MaintenanceFilter,
    ) -> DomainResult<Vec<Maintenance>> {
        let uow = self.uow.begin().await?;
        let maintenances = uow.maintenances().search(filter).await?;
        uow.commit().await?;

        if maintenances.is_empty() {
            return Err(DomainError::not_found("No maintenances found"));
        }
        Ok(maintenances)
    }

    pub async fn create_maintenance(&self, draft: MaintenanceDraft) -> DomainResult<Maintenance> {
        let new = draft.complete()?;

        let uow = self.uow.begin().await?;
        ensure_references(uow.as_ref(), &new).await?;

        let id = uow.maintenances().insert(new).await?;
        let maintenance = find(uow.as_ref(), id, "Maintenance not found!").await?;
        uow.commit().await?;

        info!(
            maintenance_id = id,
            date = %maintenance.scheduled_date,
            "Maintenance created"
        );
        Ok(maintenance)
    }

    pub async fn update_maintenance(
        &self,
        id: i32,
        draft: MaintenanceDraft,
    ) -> DomainResult<Maintenance> {
        let uow = self.uow.begin().await?;
        find(uow.as_ref(), id, "Maintenance not found.").await?;

        let (Some(car_id), Some(garage_id)) = (draft.car_id, draft.garage_id) else {
            return Err(DomainError::bad_request(
                "Car_id and Garage_id must be provided.",
            ));
        };
        ensure_car(uow.as_ref(), car_id).await?;
        ensure_garage(uow.as_ref(), garage_id).await?;

        let (Some(service_type), Some(scheduled_date)) = (draft.service_type, draft.scheduled_date)
        else {
            return Err(DomainError::bad_request(
                "Service type and scheduled date must be provided.",
            ));
        };

        let new = NewMaintenance {
            service_type,
            scheduled_date,
            car_id,
            garage_id,
        };
        uow.maintenances().update(id, new).await?;
        let maintenance = find(uow.as_ref(), id, "Maintenance not found.").await?;
        uow.commit().await?;
        Ok(maintenance)
    }

    pub async fn delete_maintenance(&self, id: i32) -> DomainResult<()> {
        let uow = self.uow.begin().await?;
        find(uow.as_ref(), id, "Maintenance not found!").await?;
        uow.maintenances().delete(id).await?;
        uow.commit().await?;
        Ok(())
    }

    /// Number of maintenances booked at a garage for every month from
    /// `start_month` to `end_month` ("YYYY-MM", both inclusive).
    ///
    /// The months are validated before the garage id. A garage that does
    /// not exist simply has no requests.
    pub async fn get_monthly_report(
        &self,
        garage_id: Option<i32>,
        start_month: Option<&str>,
        end_month: Option<&str>,
    ) -> DomainResult<Vec<MonthlyRequests>> {
        let start = parse_month(start_month, "Started month is required")?;
        let end = parse_month(end_month, "Ended month is required")?;
        if start > end {
            return Err(DomainError::bad_request(
                "Started month cannot be later than ended month.",
            ));
        }
        let garage_id =
            garage_id.ok_or_else(|| DomainError::bad_request("Garage id is required"))?;

        let uow = self.uow.begin().await?;
        let dates = uow
            .maintenances()
            .scheduled_dates(garage_id, start.first_day(), end.last_day())
            .await?;
        uow.commit().await?;

        debug!(garage_id, %start, %end, matched = dates.len(), "Monthly report computed");
        Ok(monthly_counts(start, end, dates))
    }
}

fn parse_month(value: Option<&str>, missing: &str) -> DomainResult<YearMonth> {
    value
        .ok_or_else(|| DomainError::bad_request(missing))?
        .parse()
        .map_err(|_| DomainError::bad_request("The month must be in yyyy-mm format"))
}

async fn find(uow: &dyn UnitOfWork, id: i32, missing: &str) -> DomainResult<Maintenance> {
    uow.maintenances()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(missing))
}

async fn ensure_references(uow: &dyn UnitOfWork, new: &NewMaintenance) -> DomainResult<()> {
    ensure_car(uow, new.car_id).await?;
    ensure_garage(uow, new.garage_id).await
}

async fn ensure_car(uow: &dyn UnitOfWork, car_id: i32) -> DomainResult<()> {
    if uow.cars().exists(car_id).await? {
        Ok(())
    } else {
        Err(DomainError::bad_request("Invalid car_id"))
    }
}

async fn ensure_garage(uow: &dyn UnitOfWork, garage_id: i32) -> DomainResult<()> {
    if uow.garages().find_by_id(garage_id).await?.is_some() {
        Ok(())
    } else {
        Err(DomainError::bad_request("Invalid garage_id"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::services::{CarService, GarageService};
    use crate::domain::{CarDraft, GarageDraft};
    use crate::test_support::uow_factory;

    struct Fixture {
        svc: MaintenanceService,
        cars: CarService,
        garages: GarageService,
        car_id: i32,
        garage_id: i32,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn add_garage(garages: &GarageService, name: &str) -> i32 {
        garages
            .create_garage(GarageDraft {
                name: Some(name.into()),
                location: Some("Depot road 7".into()),
                city: Some("Sapporo".into()),
                capacity: Some(3),
            })
            .await
            .unwrap()
            .id
    }

    async fn add_car(cars: &CarService, make: &str) -> i32 {
        cars.create_car(CarDraft {
            make: Some(make.into()),
            model: Some("Civic".into()),
            production_year: Some(2021),
            licence_plate: Some(format!("{make}-01")),
            garage_ids: None,
        })
        .await
        .unwrap()
        .id
    }

    async fn fixture() -> Fixture {
        let uow = uow_factory().await;
        let cars = CarService::new(uow.clone());
        let garages = GarageService::new(uow.clone());
        let car_id = add_car(&cars, "Honda").await;
        let garage_id = add_garage(&garages, "North Depot").await;
        Fixture {
            svc: MaintenanceService::new(uow),
            cars,
            garages,
            car_id,
            garage_id,
        }
    }

    fn draft(car_id: i32, garage_id: i32, on: NaiveDate) -> MaintenanceDraft {
        MaintenanceDraft {
            car_id: Some(car_id),
            garage_id: Some(garage_id),
            service_type: Some("Oil change".into()),
            scheduled_date: Some(on),
        }
    }

    impl Fixture {
        async fn book(&self, on: NaiveDate) -> Maintenance {
            self.svc
                .create_maintenance(draft(self.car_id, self.garage_id, on))
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn create_denormalizes_car_and_garage_names() {
        let f = fixture().await;
        let m = f.book(date(2024, 2, 10)).await;

        assert_eq!(m.car_name.as_deref(), Some("Honda"));
        assert_eq!(m.garage_name.as_deref(), Some("North Depot"));
        assert_eq!(f.svc.get_maintenance_by_id(m.id).await.unwrap(), m);
    }

    #[tokio::test]
    async fn create_rejects_unknown_references_with_distinct_messages() {
        let f = fixture().await;

        let err = f
            .svc
            .create_maintenance(draft(f.car_id, 404, date(2024, 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(ref m) if m == "Invalid garage_id"));

        let err = f
            .svc
            .create_maintenance(draft(404, 404, date(2024, 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(ref m) if m == "Invalid car_id"));
    }

    #[tokio::test]
    async fn create_requires_all_fields() {
        let f = fixture().await;
        let err = f
            .svc
            .create_maintenance(MaintenanceDraft {
                service_type: None,
                ..draft(f.car_id, f.garage_id, date(2024, 1, 1))
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad request!");
    }

    #[tokio::test]
    async fn list_filters_and_orders_by_date() {
        let f = fixture().await;
        let other_car = add_car(&f.cars, "Mazda").await;
        let late = f.book(date(2024, 3, 5)).await;
        let early = f.book(date(2024, 1, 20)).await;
        f.svc
            .create_maintenance(draft(other_car, f.garage_id, date(2024, 2, 1)))
            .await
            .unwrap();

        let all = f.svc.get_maintenances(&MaintenanceFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].scheduled_date <= w[1].scheduled_date));

        let mine = f
            .svc
            .get_maintenances(&MaintenanceFilter {
                car_id: Some(f.car_id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(mine.iter().map(|m| m.id).collect::<Vec<_>>(), vec![early.id, late.id]);

        let window = f
            .svc
            .get_maintenances(&MaintenanceFilter {
                start_date: Some(date(2024, 2, 1)),
                end_date: Some(date(2024, 3, 5)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(window.len(), 2);
    }

    #[tokio::test]
    async fn empty_list_is_not_found() {
        let f = fixture().await;
        f.book(date(2024, 1, 1)).await;

        let err = f
            .svc
            .get_maintenances(&MaintenanceFilter {
                car_id: Some(9999),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "No maintenances found"));
    }

    #[tokio::test]
    async fn update_validation_order() {
        let f = fixture().await;
        let m = f.book(date(2024, 1, 1)).await;

        let err = f
            .svc
            .update_maintenance(m.id + 100, MaintenanceDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref s) if s == "Maintenance not found."));

        let err = f
            .svc
            .update_maintenance(m.id, MaintenanceDraft { garage_id: None, ..draft(f.car_id, 0, date(2024, 1, 1)) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Car_id and Garage_id must be provided.");

        let err = f
            .svc
            .update_maintenance(m.id, draft(404, f.garage_id, date(2024, 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(ref s) if s == "Invalid car_id"));

        // both unknown: the car is checked first
        let err = f
            .svc
            .update_maintenance(m.id, draft(404, 405, date(2024, 1, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid car_id");

        let err = f
            .svc
            .update_maintenance(m.id, draft(f.car_id, 404, date(2024, 1, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid garage_id");

        let err = f
            .svc
            .update_maintenance(
                m.id,
                MaintenanceDraft { scheduled_date: None, ..draft(f.car_id, f.garage_id, date(2024, 1, 1)) },
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Service type and scheduled date must be provided.");
    }

    #[tokio::test]
    async fn update_moves_maintenance_to_other_garage() {
        let f = fixture().await;
        let south = add_garage(&f.garages, "South Depot").await;
        let m = f.book(date(2024, 1, 1)).await;

        let updated = f
            .svc
            .update_maintenance(m.id, draft(f.car_id, south, date(2024, 4, 2)))
            .await
            .unwrap();
        assert_eq!(updated.garage_id, south);
        assert_eq!(updated.garage_name.as_deref(), Some("South Depot"));
        assert_eq!(updated.scheduled_date, date(2024, 4, 2));
    }

    #[tokio::test]
    async fn deleted_maintenance_is_gone() {
        let f = fixture().await;
        let m = f.book(date(2024, 1, 1)).await;

        f.svc.delete_maintenance(m.id).await.unwrap();
        let err = f.svc.get_maintenance_by_id(m.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref s) if s == "Maintenance not found!"));
        assert!(f.svc.delete_maintenance(m.id).await.is_err());
    }

    #[tokio::test]
    async fn referenced_car_and_garage_cannot_be_deleted() {
        let f = fixture().await;
        f.book(date(2024, 1, 1)).await;

        let err = f.cars.delete_car(f.car_id).await.unwrap_err();
        assert_eq!(err.to_string(), "Car has scheduled maintenances");
        let err = f.garages.delete_garage(f.garage_id).await.unwrap_err();
        assert_eq!(err.to_string(), "Garage has scheduled maintenances");
    }

    #[tokio::test]
    async fn report_fills_empty_months_with_zero() {
        let f = fixture().await;
        f.book(date(2024, 2, 1)).await;
        f.book(date(2024, 2, 29)).await;
        f.book(date(2023, 12, 31)).await;
        f.book(date(2024, 4, 1)).await;

        let report = f
            .svc
            .get_monthly_report(Some(f.garage_id), Some("2024-01"), Some("2024-03"))
            .await
            .unwrap();
        let lines: Vec<_> = report
            .iter()
            .map(|r| (r.year_month.to_string(), r.requests))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("2024-01".to_string(), 0),
                ("2024-02".to_string(), 2),
                ("2024-03".to_string(), 0),
            ]
        );
    }

    #[tokio::test]
    async fn report_counts_whole_end_month() {
        let f = fixture().await;
        f.book(date(2024, 3, 31)).await;

        let report = f
            .svc
            .get_monthly_report(Some(f.garage_id), Some("2024-03"), Some("2024-03"))
            .await
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].requests, 1);
    }

    #[tokio::test]
    async fn report_for_unknown_garage_is_all_zero() {
        let f = fixture().await;
        let report = f
            .svc
            .get_monthly_report(Some(777), Some("2023-11"), Some("2024-02"))
            .await
            .unwrap();
        assert_eq!(report.len(), 4);
        assert!(report.iter().all(|r| r.requests == 0));
        assert_eq!(report[1].year_month.to_string(), "2023-12");
        assert_eq!(report[2].year_month.to_string(), "2024-01");
    }

    #[tokio::test]
    async fn report_parameter_errors() {
        let f = fixture().await;
        let svc = &f.svc;

        let cases: [(Option<i32>, Option<&str>, Option<&str>, &str); 7] = [
            (Some(1), None, Some("2024-01"), "Started month is required"),
            (Some(1), Some("2024-01"), None, "Ended month is required"),
            (Some(1), Some("2024/01"), Some("2024-02"), "The month must be in yyyy-mm format"),
            (Some(1), Some(" 2024-01"), Some("2024-02"), "The month must be in yyyy-mm format"),
            (Some(1), Some("2024-01"), Some("2024-02 "), "The month must be in yyyy-mm format"),
            (None, Some("2024-05"), Some("2024-01"), "Started month cannot be later than ended month."),
            (None, Some("2024-01"), Some("2024-05"), "Garage id is required"),
        ];
        for (garage_id, start, end, message) in cases {
            let err = svc.get_monthly_report(garage_id, start, end).await.unwrap_err();
            assert!(matches!(err, DomainError::BadRequest(_)));
            assert_eq!(err.to_string(), message);
        }
    }
}
