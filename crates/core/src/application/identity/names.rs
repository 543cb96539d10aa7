// Name tables for queue id derivation
//
// Changing either table (order or contents) changes every derived queue id.

pub const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Ada", "Adrian", "Agnes", "Alan", "Albert", "Alice",
    "Amelia", "Amos", "Anna", "Anton", "Arthur", "Astrid", "August", "Barbara",
    "Basil", "Beatrice", "Benjamin", "Bernard", "Bertha", "Blanche", "Boris", "Bruno",
    "Camille", "Carl", "Caroline", "Cecil", "Celia", "Charles", "Clara", "Claude",
    "Cora", "Daniel", "Daphne", "David", "Delia", "Dora", "Douglas", "Edgar",
    "Edith", "Edmund", "Eleanor", "Elias", "Eliza", "Emil", "Emma", "Ernest",
    "Esther", "Eva", "Felix", "Flora", "Frances", "Frederick", "Gabriel", "George",
    "Gerald", "Gertrude", "Grace", "Gustav", "Harold", "Harriet", "Hazel", "Helen",
    "Henry", "Hugo", "Ida", "Irene", "Isaac", "Ivan", "Ivy", "Jacob",
    "Jane", "Jasper", "Joan", "Jonas", "Josephine", "Julia", "Julian", "June",
    "Karl", "Klara", "Lena", "Leo", "Leonard", "Lillian", "Louis", "Lucy",
    "Mabel", "Magnus", "Margaret", "Marian", "Martin", "Mathilda", "Maurice", "Mila",
    "Nadia", "Nathan", "Nell", "Nora", "Oliver", "Olive", "Oscar", "Otto",
    "Pearl", "Peter", "Philip", "Quentin", "Rosa", "Rose", "Rufus", "Ruth",
    "Samuel", "Sibyl", "Silas", "Sophie", "Stella", "Theodore", "Thea", "Tobias",
    "Ursula", "Vera", "Victor", "Viola", "Walter", "Willa", "Xavier", "Zelda",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Adler", "Alcott", "Archer", "Ashby", "Atwood", "Bain", "Baker",
    "Barlow", "Baxter", "Bell", "Bishop", "Blake", "Booth", "Bowen", "Brandt",
    "Brooks", "Burke", "Byrne", "Carver", "Chandler", "Clay", "Cole", "Conway",
    "Cooper", "Crane", "Dalton", "Darby", "Dawson", "Dean", "Dixon", "Doyle",
    "Drake", "Dunn", "Eaton", "Ellis", "Emerson", "Falk", "Fenwick", "Finch",
    "Fisher", "Fletcher", "Ford", "Foster", "Fox", "Gale", "Garner", "Gibbs",
    "Glover", "Graves", "Hale", "Hardy", "Harlow", "Hayes", "Holt", "Hopper",
    "Howell", "Hughes", "Hunt", "Ingram", "Irwin", "Jarvis", "Keller", "Kemp",
    "Kent", "Kirby", "Knox", "Lamb", "Lane", "Lawson", "Lindgren", "Lloyd",
    "Lovelace", "Lowe", "Lynch", "Marsh", "Mason", "Mercer", "Miles", "Monroe",
    "Morgan", "Nash", "Navarro", "Noble", "Norris", "Novak", "Oakley", "Osborne",
    "Palmer", "Parker", "Payne", "Pierce", "Porter", "Quinn", "Ramsey", "Reed",
    "Rhodes", "Rowe", "Russo", "Sawyer", "Shaw", "Sinclair", "Sloane", "Stone",
    "Sutton", "Sykes", "Thorne", "Tate", "Thatcher", "Turing", "Tyler", "Vance",
    "Vaughn", "Wade", "Walsh", "Ward", "Warren", "Webb", "Wells", "West",
    "Wheeler", "Whitman", "Wilde", "Wolfe", "Wren", "Wyatt", "York", "Young",
];
