use rand::Rng;
use stride::entity::Entity;

// Small enough that a few hundred moves never overflow.
const BOUND: i32 = 1 << 20;

pub fn rand_amount<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(-BOUND..BOUND)
}

pub fn rand_entity<R: Rng + ?Sized>(rng: &mut R) -> Entity {
    Entity::new(rand_amount(rng), rand_amount(rng))
}
