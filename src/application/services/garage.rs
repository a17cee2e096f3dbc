//! Garage use-cases

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, Garage, GarageDraft, UnitOfWorkFactory};

pub struct GarageService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl GarageService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    pub async fn get_garage_by_id(&self, id: i32) -> DomainResult<Garage> {
        let uow = self.uow.begin().await?;
        let garage = uow
            .garages()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Garage not found"))?;
        uow.commit().await?;
        Ok(garage)
    }

    /// All garages, or only those whose city contains `city` ignoring case.
    pub async fn get_garages(&self, city: Option<&str>) -> DomainResult<Vec<Garage>> {
        let uow = self.uow.begin().await?;
        let garages = uow.garages().search(city).await?;
        uow.commit().await?;
        Ok(garages)
    }

    pub async fn create_garage(&self, draft: GarageDraft) -> DomainResult<Garage> {
        let new = draft
            .complete()
            .ok_or_else(|| DomainError::bad_request("Bad Request!"))?;

        let uow = self.uow.begin().await?;
        let garage = uow.garages().insert(new).await?;
        uow.commit().await?;

        info!(garage_id = garage.id, city = %garage.city, "Garage created");
        Ok(garage)
    }

    /// Replaces every field of an existing garage.
    pub async fn update_garage(&self, id: i32, draft: GarageDraft) -> DomainResult<Garage> {
        let uow = self.uow.begin().await?;
        if uow.garages().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Garage is not found."));
        }

        let new = draft.require_each()?;
        let garage = uow.garages().update(id, new).await?;
        uow.commit().await?;
        Ok(garage)
    }

    pub async fn delete_garage(&self, id: i32) -> DomainResult<()> {
        let uow = self.uow.begin().await?;
        if uow.garages().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Garage not found"));
        }
        if uow.maintenances().count_for_garage(id).await? > 0 {
            return Err(DomainError::bad_request("Garage has scheduled maintenances"));
        }

        uow.garages().delete(id).await?;
        uow.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::uow_factory;

    fn draft(name: &str, city: &str) -> GarageDraft {
        GarageDraft {
            name: Some(name.into()),
            location: Some("Main street 1".into()),
            city: Some(city.into()),
            capacity: Some(5),
        }
    }

    async fn service() -> GarageService {
        GarageService::new(uow_factory().await)
    }

    #[tokio::test]
    async fn created_garage_reads_back_identically() {
        let svc = service().await;
        let created = svc.create_garage(draft("Kansai Motors", "Kyoto")).await.unwrap();

        let fetched = svc.get_garage_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Kansai Motors");
        assert_eq!(fetched.location, "Main street 1");
        assert_eq!(fetched.city, "Kyoto");
        assert_eq!(fetched.capacity, 5);
    }

    #[tokio::test]
    async fn create_rejects_each_missing_field() {
        let svc = service().await;
        let cases = [
            GarageDraft { name: None, ..draft("a", "b") },
            GarageDraft { city: None, ..draft("a", "b") },
            GarageDraft { capacity: None, ..draft("a", "b") },
            GarageDraft { location: None, ..draft("a", "b") },
        ];
        for case in cases {
            let err = svc.create_garage(case).await.unwrap_err();
            assert!(matches!(err, DomainError::BadRequest(ref m) if m == "Bad Request!"));
        }
        assert!(svc.get_garages(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn city_filter_is_case_insensitive_substring() {
        let svc = service().await;
        svc.create_garage(draft("A", "Kyoto")).await.unwrap();
        svc.create_garage(draft("B", "Osaka")).await.unwrap();
        svc.create_garage(draft("C", "YOTSUYA")).await.unwrap();

        let names: Vec<_> = svc
            .get_garages(Some("yot"))
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);

        assert_eq!(svc.get_garages(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn city_filter_with_non_ascii_letters() {
        let svc = service().await;
        svc.create_garage(draft("A", "ÅLESUND")).await.unwrap();

        for query in ["ÅLESUND", "Ålesund", "LESUND"] {
            let found = svc.get_garages(Some(query)).await.unwrap();
            assert_eq!(found.len(), 1, "{query} should match");
        }
    }

    #[tokio::test]
    async fn get_unknown_garage_is_not_found() {
        let err = service().await.get_garage_by_id(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "Garage not found"));
    }

    #[tokio::test]
    async fn update_checks_existence_before_fields() {
        let err = service()
            .await
            .update_garage(99, GarageDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "Garage is not found."));
    }

    #[tokio::test]
    async fn update_names_first_missing_field_in_order() {
        let svc = service().await;
        let g = svc.create_garage(draft("A", "Kyoto")).await.unwrap();

        let err = svc
            .update_garage(g.id, GarageDraft { name: None, city: None, ..draft("A", "Kyoto") })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Name is required.");

        let err = svc
            .update_garage(g.id, GarageDraft { location: None, capacity: None, ..draft("A", "Kyoto") })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Capacity is required.");
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let svc = service().await;
        let g = svc.create_garage(draft("A", "Kyoto")).await.unwrap();

        let updated = svc
            .update_garage(
                g.id,
                GarageDraft {
                    name: Some("B".into()),
                    location: Some("Elsewhere 2".into()),
                    city: Some("Nara".into()),
                    capacity: Some(9),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, g.id);
        assert_eq!(svc.get_garage_by_id(g.id).await.unwrap().city, "Nara");
        assert_eq!(updated.capacity, 9);
    }

    #[tokio::test]
    async fn delete_removes_garage() {
        let svc = service().await;
        let g = svc.create_garage(draft("A", "Kyoto")).await.unwrap();
        svc.delete_garage(g.id).await.unwrap();
        assert!(matches!(
            svc.get_garage_by_id(g.id).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_garage(g.id).await,
            Err(DomainError::NotFound(_))
        ));
    }
}
