// src/repositories/memory/associations_tests.rs
//
// UNIT TESTS: Association manager
//
// INVARIANTS TESTED:
// - A movie is tagged to at most one director; reassignment untags the old one
// - Actor links are idempotent and symmetric
// - Actors are compared by name and movies by (title, year) when linking
// - Failed calls change nothing

#[cfg(test)]
mod association_tests {
    use crate::domain::{Actor, ActorId, Director, DirectorId, Movie, MovieId};
    use crate::error::AppError;
    use crate::repositories::{MemoryRepository, MovieRepository};

    fn repo_with_movies() -> MemoryRepository {
        let mut repo = MemoryRepository::new();
        repo.add_movie(Movie::new(MovieId(1), "Alien", 1979)).unwrap();
        repo.add_movie(Movie::new(MovieId(2), "Aliens", 1986)).unwrap();
        repo
    }

    #[test]
    fn test_director_reassignment_is_exclusive() {
        let mut repo = repo_with_movies();
        let scott = repo.add_director(Director::new("Ridley Scott").unwrap());
        let cameron = repo.add_director(Director::new("James Cameron").unwrap());

        repo.assign_director(MovieId(1), scott).unwrap();
        repo.assign_director(MovieId(1), cameron).unwrap();

        assert_eq!(repo.get_movie(MovieId(1)).unwrap().director(), Some(cameron));
        assert!(repo.get_director(scott).unwrap().tagged_movies().is_empty());
        assert_eq!(repo.get_director(cameron).unwrap().tagged_movies(), &[MovieId(1)]);
    }

    #[test]
    fn test_director_assignment_is_idempotent() {
        let mut repo = repo_with_movies();
        let scott = repo.add_director(Director::new("Ridley Scott").unwrap());

        repo.assign_director(MovieId(1), scott).unwrap();
        repo.assign_director(MovieId(1), scott).unwrap();
        repo.assign_director(MovieId(2), scott).unwrap();

        assert_eq!(
            repo.get_movie_ids_for_director("Ridley Scott"),
            vec![MovieId(1), MovieId(2)]
        );
    }

    #[test]
    fn test_director_assignment_with_unknown_handles_changes_nothing() {
        let mut repo = repo_with_movies();
        let scott = repo.add_director(Director::new("Ridley Scott").unwrap());
        repo.assign_director(MovieId(1), scott).unwrap();

        let result = repo.assign_director(MovieId(1), DirectorId(9));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(repo.get_movie(MovieId(1)).unwrap().director(), Some(scott));
        assert_eq!(repo.get_director(scott).unwrap().tagged_movies(), &[MovieId(1)]);

        let result = repo.assign_director(MovieId(9), scott);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_actor_link_is_idempotent() {
        let mut repo = repo_with_movies();
        let weaver = repo.add_actor(Actor::new("Sigourney Weaver").unwrap());

        assert!(repo.add_actor_to_movie(MovieId(1), weaver).unwrap());
        assert!(!repo.add_actor_to_movie(MovieId(1), weaver).unwrap());

        assert_eq!(repo.get_movie(MovieId(1)).unwrap().actors(), &[weaver]);
        assert_eq!(repo.get_actor(weaver).unwrap().tagged_movies(), &[MovieId(1)]);
        assert_eq!(repo.get_movie_ids_for_actor("Sigourney Weaver"), vec![MovieId(1)]);
    }

    #[test]
    fn test_actor_unlink_is_symmetric() {
        let mut repo = repo_with_movies();
        let weaver = repo.add_actor(Actor::new("Sigourney Weaver").unwrap());
        let hurt = repo.add_actor(Actor::new("John Hurt").unwrap());
        repo.add_actor_to_movie(MovieId(1), weaver).unwrap();
        repo.add_actor_to_movie(MovieId(1), hurt).unwrap();
        repo.add_actor_to_movie(MovieId(2), weaver).unwrap();

        // Removing the last entry of the list works
        assert!(repo.remove_actor_from_movie(MovieId(1), hurt).unwrap());
        assert_eq!(repo.get_movie(MovieId(1)).unwrap().actors(), &[weaver]);
        assert!(repo.get_actor(hurt).unwrap().tagged_movies().is_empty());

        assert!(repo.remove_actor_from_movie(MovieId(1), weaver).unwrap());
        assert!(repo.get_movie(MovieId(1)).unwrap().actors().is_empty());
        assert_eq!(repo.get_actor(weaver).unwrap().tagged_movies(), &[MovieId(2)]);

        assert!(!repo.remove_actor_from_movie(MovieId(1), weaver).unwrap());
    }

    #[test]
    fn test_actor_link_with_unknown_actor_fails() {
        let mut repo = repo_with_movies();
        let result = repo.add_actor_to_movie(MovieId(1), ActorId(0));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(repo.get_movie(MovieId(1)).unwrap().actors().is_empty());
    }

    #[test]
    fn test_colleagues_are_mutual() {
        let mut repo = repo_with_movies();
        let weaver = repo.add_actor(Actor::new("Sigourney Weaver").unwrap());
        let hurt = repo.add_actor(Actor::new("John Hurt").unwrap());
        let holm = repo.add_actor(Actor::new("Ian Holm").unwrap());

        repo.add_actor_colleague(weaver, hurt).unwrap();

        assert!(repo.get_actor(weaver).unwrap().has_worked_with(hurt));
        assert!(repo.get_actor(hurt).unwrap().has_worked_with(weaver));
        assert!(!repo.get_actor(weaver).unwrap().has_worked_with(holm));

        assert!(repo.add_actor_colleague(holm, holm).is_err());
    }

    #[test]
    fn test_new_movie_carries_no_links() {
        let mut repo = repo_with_movies();
        let scott = repo.add_director(Director::new("Ridley Scott").unwrap());
        repo.assign_director(MovieId(1), scott).unwrap();

        // A clone re-inserted under a fresh id must not claim the director
        let mut copy = repo.get_movie(MovieId(1)).unwrap();
        copy.id = MovieId(3);
        repo.add_movie(copy).unwrap();

        assert_eq!(repo.get_movie(MovieId(3)).unwrap().director(), None);
        assert_eq!(repo.get_movie_ids_for_director("Ridley Scott"), vec![MovieId(1)]);
    }

    #[test]
    fn test_same_named_actor_is_not_cast_twice() {
        let mut repo = repo_with_movies();
        let skerritt = repo.add_actor(Actor::new("Tom Skerritt").unwrap());
        let namesake = repo.add_actor(Actor::new("Tom Skerritt").unwrap());

        assert!(repo.add_actor_to_movie(MovieId(1), skerritt).unwrap());
        assert!(!repo.add_actor_to_movie(MovieId(1), namesake).unwrap());

        assert_eq!(repo.get_movie(MovieId(1)).unwrap().actors(), &[skerritt]);
        assert!(repo.get_actor(namesake).unwrap().tagged_movies().is_empty());

        // Unlinking through the namesake removes the stored pair
        assert!(repo.remove_actor_from_movie(MovieId(1), namesake).unwrap());
        assert!(repo.get_movie(MovieId(1)).unwrap().actors().is_empty());
        assert!(repo.get_actor(skerritt).unwrap().tagged_movies().is_empty());
    }

    #[test]
    fn test_equal_movies_are_tagged_once() {
        let mut repo = repo_with_movies();
        repo.add_movie(Movie::new(MovieId(7), "Alien", 1979)).unwrap();
        let skerritt = repo.add_actor(Actor::new("Tom Skerritt").unwrap());
        let scott = repo.add_director(Director::new("Ridley Scott").unwrap());

        assert!(repo.add_actor_to_movie(MovieId(1), skerritt).unwrap());
        assert!(!repo.add_actor_to_movie(MovieId(7), skerritt).unwrap());
        assert_eq!(repo.get_actor(skerritt).unwrap().tagged_movies(), &[MovieId(1)]);
        assert!(repo.get_movie(MovieId(7)).unwrap().actors().is_empty());

        repo.assign_director(MovieId(1), scott).unwrap();
        repo.assign_director(MovieId(7), scott).unwrap();
        assert_eq!(repo.get_movie(MovieId(7)).unwrap().director(), Some(scott));
        assert_eq!(repo.get_director(scott).unwrap().tagged_movies(), &[MovieId(1)]);

        // Moving the tagged copy away hands the entry to the one still directed
        let cameron = repo.add_director(Director::new("James Cameron").unwrap());
        repo.assign_director(MovieId(1), cameron).unwrap();
        assert_eq!(repo.get_director(scott).unwrap().tagged_movies(), &[MovieId(7)]);
        assert_eq!(repo.get_director(cameron).unwrap().tagged_movies(), &[MovieId(1)]);
    }
}
