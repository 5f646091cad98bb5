//! Word lists for synthetic profiles

pub const FIRST_NAMES: &[&str] = &[
  "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
  "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
  "Charles", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty", "Mark", "Sandra",
  "Steven", "Ashley", "Andrew", "Emily", "Joshua", "Michelle", "Kevin", "Amanda", "Brian",
  "Melissa", "George", "Stephanie", "Timothy", "Rebecca", "Ronald", "Laura", "Jason", "Sharon",
];

pub const LAST_NAMES: &[&str] = &[
  "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
  "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
  "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
  "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres",
  "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
];

pub const STREET_NAMES: &[&str] = &[
  "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Walnut",
  "Sunset", "Lincoln", "Jackson", "Church", "River", "Highland", "Willow", "Meadow", "Forest",
];

pub const STREET_SUFFIXES: &[&str] = &[
  "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Terrace",
];

pub const CITIES: &[&str] = &[
  "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
  "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
  "Burlington", "Manchester", "Milton", "Newport", "Auburn", "Dayton", "Lexington", "Milford",
];

pub const STATES: &[&str] = &[
  "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
  "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa", "Kansas",
  "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota",
  "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
  "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma", "Oregon",
  "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah",
  "Vermont", "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

pub const COUNTRIES: &[&str] = &[
  "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile", "Denmark",
  "Egypt", "Finland", "France", "Germany", "Greece", "India", "Ireland", "Italy", "Japan",
  "Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Poland", "Portugal", "Singapore",
  "South Africa", "Spain", "Sweden", "Switzerland", "United Kingdom", "United States",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];
