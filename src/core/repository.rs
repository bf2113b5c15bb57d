use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // create an entity, fails with DuplicateKey if its id is taken
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<&Entity>;

    // delete an entity and hand it back
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    fn count(&self) -> usize;
}
