mod profile_properties;
