//! Car use-cases

use std::sync::Arc;

use tracing::info;

use crate::domain::{Car, CarDraft, DomainError, DomainResult, UnitOfWork, UnitOfWorkFactory};

pub struct CarService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl CarService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    pub async fn get_car_by_id(&self, id: i32) -> DomainResult<Car> {
        let uow = self.uow.begin().await?;
        let car = uow
            .cars()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Car not found"))?;
        uow.commit().await?;
        Ok(car)
    }

    pub async fn get_cars(&self) -> DomainResult<Vec<Car>> {
        let uow = self.uow.begin().await?;
        let cars = uow.cars().find_all().await?;
        uow.commit().await?;
        Ok(cars)
    }

    pub async fn create_car(&self, draft: CarDraft) -> DomainResult<Car> {
        let (new, garage_ids) = draft.complete()?;
        let garage_ids = garage_ids.unwrap_or_default();

        let uow = self.uow.begin().await?;
        ensure_garages_exist(uow.as_ref(), &garage_ids).await?;

        let id = uow.cars().insert(new).await?;
        uow.cars().replace_garages(id, &garage_ids).await?;
        let car = load(uow.as_ref(), id).await?;
        uow.commit().await?;

        info!(car_id = id, garages = garage_ids.len(), "Car created");
        Ok(car)
    }

    /// Replaces the car fields. Garage associations are replaced only when
    /// the draft lists garage ids.
    pub async fn update_car(&self, id: i32, draft: CarDraft) -> DomainResult<Car> {
        let uow = self.uow.begin().await?;
        if !uow.cars().exists(id).await? {
            return Err(DomainError::not_found("Car is not found."));
        }

        let (new, garage_ids) = draft.require_each()?;
        if let Some(ids) = &garage_ids {
            ensure_garages_exist(uow.as_ref(), ids).await?;
        }

        uow.cars().update(id, new).await?;
        if let Some(ids) = &garage_ids {
            uow.cars().replace_garages(id, ids).await?;
        }
        let car = load(uow.as_ref(), id).await?;
        uow.commit().await?;
        Ok(car)
    }

    pub async fn delete_car(&self, id: i32) -> DomainResult<()> {
        let uow = self.uow.begin().await?;
        if !uow.cars().exists(id).await? {
            return Err(DomainError::not_found("Car not found"));
        }
        if uow.maintenances().count_for_car(id).await? > 0 {
            return Err(DomainError::bad_request("Car has scheduled maintenances"));
        }

        uow.cars().delete(id).await?;
        uow.commit().await?;
        Ok(())
    }
}

async fn ensure_garages_exist(uow: &dyn UnitOfWork, ids: &[i32]) -> DomainResult<()> {
    let found = uow.garages().find_by_ids(ids).await?;
    // `ids` is sorted and deduplicated, as is `found`
    if let Some(missing) = ids.iter().find(|id| !found.iter().any(|g| g.id == **id)) {
        return Err(DomainError::bad_request(format!("Invalid garage_id: {}", missing)));
    }
    Ok(())
}

async fn load(uow: &dyn UnitOfWork, id: i32) -> DomainResult<Car> {
    uow.cars()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Car not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::GarageService;
    use crate::domain::GarageDraft;
    use crate::test_support::uow_factory;

    struct Fixture {
        cars: CarService,
        garages: GarageService,
    }

    async fn fixture() -> Fixture {
        let uow = uow_factory().await;
        Fixture {
            cars: CarService::new(uow.clone()),
            garages: GarageService::new(uow),
        }
    }

    async fn garage(f: &Fixture, name: &str) -> i32 {
        f.garages
            .create_garage(GarageDraft {
                name: Some(name.into()),
                location: Some("Harbour 3".into()),
                city: Some("Kobe".into()),
                capacity: Some(2),
            })
            .await
            .unwrap()
            .id
    }

    fn draft(garage_ids: Option<Vec<i32>>) -> CarDraft {
        CarDraft {
            make: Some("Toyota".into()),
            model: Some("Corolla".into()),
            production_year: Some(2019),
            licence_plate: Some("KB-1001".into()),
            garage_ids,
        }
    }

    #[tokio::test]
    async fn create_links_garages_once_each() {
        let f = fixture().await;
        let g1 = garage(&f, "One").await;
        let g2 = garage(&f, "Two").await;

        let car = f.cars.create_car(draft(Some(vec![g2, g1, g2]))).await.unwrap();
        let ids: Vec<_> = car.garages.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![g1, g2]);

        let fetched = f.cars.get_car_by_id(car.id).await.unwrap();
        assert_eq!(fetched, car);
    }

    #[tokio::test]
    async fn create_with_unknown_garage_persists_nothing() {
        let f = fixture().await;
        let g1 = garage(&f, "One").await;

        let err = f.cars.create_car(draft(Some(vec![g1, 77]))).await.unwrap_err();
        assert!(matches!(err, DomainError::BadRequest(ref m) if m == "Invalid garage_id: 77"));
        assert!(f.cars.get_cars().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_requires_every_car_field() {
        let f = fixture().await;
        let err = f
            .cars
            .create_car(CarDraft { licence_plate: None, ..draft(None) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad Request!");
    }

    #[tokio::test]
    async fn update_keeps_garages_unless_listed() {
        let f = fixture().await;
        let g1 = garage(&f, "One").await;
        let g2 = garage(&f, "Two").await;
        let car = f.cars.create_car(draft(Some(vec![g1]))).await.unwrap();

        let kept = f
            .cars
            .update_car(car.id, CarDraft { model: Some("Yaris".into()), ..draft(None) })
            .await
            .unwrap();
        assert_eq!(kept.model, "Yaris");
        assert_eq!(kept.garages.len(), 1);

        let replaced = f.cars.update_car(car.id, draft(Some(vec![g2]))).await.unwrap();
        assert_eq!(replaced.garages.iter().map(|g| g.id).collect::<Vec<_>>(), vec![g2]);

        let cleared = f.cars.update_car(car.id, draft(Some(vec![]))).await.unwrap();
        assert!(cleared.garages.is_empty());
    }

    #[tokio::test]
    async fn update_reports_missing_car_then_missing_field() {
        let f = fixture().await;
        let err = f.cars.update_car(5, CarDraft::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "Car is not found."));

        let car = f.cars.create_car(draft(None)).await.unwrap();
        let err = f
            .cars
            .update_car(car.id, CarDraft { model: None, production_year: None, ..draft(None) })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Model is required.");
    }

    #[tokio::test]
    async fn deleting_garage_drops_its_car_links() {
        let f = fixture().await;
        let g1 = garage(&f, "One").await;
        let car = f.cars.create_car(draft(Some(vec![g1]))).await.unwrap();

        f.garages.delete_garage(g1).await.unwrap();
        assert!(f.cars.get_car_by_id(car.id).await.unwrap().garages.is_empty());
    }

    #[tokio::test]
    async fn delete_car() {
        let f = fixture().await;
        let car = f.cars.create_car(draft(None)).await.unwrap();
        f.cars.delete_car(car.id).await.unwrap();
        assert!(matches!(
            f.cars.get_car_by_id(car.id).await,
            Err(DomainError::NotFound(ref m)) if m == "Car not found"
        ));
    }
}
